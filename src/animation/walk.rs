use crate::{
    animation::{
        config::AnimationConfig,
        style::{KEYFRAME_BLOCK, apply_animation},
    },
    document::node::{Child, DocumentNode},
    foundation::error::SvgLineResult,
    geometry::{
        path_length::PathLengthOracle,
        shape::{ShapeKind, shape_length},
    },
};

/// Where the root-level keyframe block ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleTarget {
    /// The root already had a style child at this child-slot index.
    Existing(usize),
    /// An empty style element was inserted as the root's first child.
    Inserted,
}

/// Summary of one traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkReport {
    /// Root-level style element that holds the keyframe block.
    pub style_target: StyleTarget,
    /// Drawable elements that received an animation.
    pub shapes: usize,
    /// Style elements the keyframe block was appended to.
    pub style_nodes: usize,
    /// Shapes whose length came out `NaN` or infinite.
    pub non_finite_lengths: usize,
}

/// Find the root's first style child, or insert an empty `<style type="text/css">` in front.
///
/// The keyframe block itself is appended later by the walk, so every style element gets it
/// exactly once per run.
pub fn locate_style_target(root: &mut DocumentNode) -> StyleTarget {
    let existing = root.children.iter().position(
        |c| matches!(c, Child::Element(e) if ShapeKind::of(&e.name) == ShapeKind::Style),
    );
    match existing {
        Some(idx) => StyleTarget::Existing(idx),
        None => {
            let style = DocumentNode::new("style").with_attr("type", "text/css");
            root.children.insert(0, Child::Element(style));
            StyleTarget::Inserted
        }
    }
}

struct Walker<'a> {
    cfg: &'a AnimationConfig,
    oracle: &'a dyn PathLengthOracle,
    shapes: usize,
    style_nodes: usize,
    non_finite_lengths: usize,
}

impl Walker<'_> {
    fn visit(&mut self, node: &mut DocumentNode) -> SvgLineResult<()> {
        let kind = ShapeKind::of(&node.name);
        match kind {
            ShapeKind::Style => {
                node.append_style_text(KEYFRAME_BLOCK);
                self.style_nodes += 1;
            }
            ShapeKind::Circle
            | ShapeKind::Rect
            | ShapeKind::Path
            | ShapeKind::Line
            | ShapeKind::Polygon
            | ShapeKind::Polyline => {
                if let Some(length) = shape_length(node, kind, self.oracle)? {
                    if !length.is_finite() {
                        tracing::warn!(element = %node.name, length, "non-finite shape length");
                        self.non_finite_lengths += 1;
                    }
                    tracing::debug!(?kind, length, "animate shape");
                    apply_animation(node, length, self.cfg);
                    self.shapes += 1;
                }
            }
            ShapeKind::Container => {
                for child in node.elements_mut() {
                    self.visit(child)?;
                }
            }
        }
        Ok(())
    }
}

/// Inject the draw-on animation into `root` and everything below it.
///
/// Runs in two phases: [`locate_style_target`] makes sure the root owns a style element, then a
/// depth-first walk appends [`KEYFRAME_BLOCK`] to every style element and an animation to every
/// drawable shape. Containers are recursed into and never modified themselves. The first
/// geometry error aborts the walk.
pub fn animate_tree(
    root: &mut DocumentNode,
    cfg: &AnimationConfig,
    oracle: &dyn PathLengthOracle,
) -> SvgLineResult<WalkReport> {
    let style_target = locate_style_target(root);

    let mut walker = Walker {
        cfg,
        oracle,
        shapes: 0,
        style_nodes: 0,
        non_finite_lengths: 0,
    };
    walker.visit(root)?;

    Ok(WalkReport {
        style_target,
        shapes: walker.shapes,
        style_nodes: walker.style_nodes,
        non_finite_lengths: walker.non_finite_lengths,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/walk.rs"]
mod tests;
