//! svgline turns a static SVG drawing into one that draws itself.
//!
//! Every drawable shape gets a `stroke-dasharray` / `stroke-dashoffset` pair equal to its
//! traversal length plus an `animation` declaration that runs a shared `@keyframes` rule,
//! so the stroke appears to be traced from start to end.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: markup text -> [`Document`] ([`parse_document`])
//! 2. **Locate**: make sure the root owns a `<style>` element ([`locate_style_target`])
//! 3. **Walk**: depth-first over the tree; style elements receive [`KEYFRAME_BLOCK`], shapes
//!    receive their length-based animation ([`animate_tree`])
//! 4. **Write**: [`Document`] -> markup text ([`write_document`])
//!
//! Lengths come from [`shape_length`]: closed-form formulas for circles, rectangles and lines,
//! and a [`PathLengthOracle`] (by default [`KurboPathLength`]) for paths, polygons and
//! polylines.
//!
//! Running the transform twice is not idempotent: each run appends another keyframe block and
//! another set of declarations.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod document;
mod foundation;
mod geometry;
mod pipeline;

pub use animation::config::{AnimationConfig, Direction, IterationCount, TimingFunction};
pub use animation::style::{
    KEYFRAME_BLOCK, KEYFRAME_NAME, animation_declarations, apply_animation, format_length,
};
pub use animation::walk::{StyleTarget, WalkReport, animate_tree, locate_style_target};
pub use document::node::{Attributes, Child, Document, DocumentNode, Misc, XmlDecl};
pub use document::parse::parse_document;
pub use document::write::write_document;
pub use foundation::error::{SvgLineError, SvgLineResult};
pub use geometry::path_length::{DEFAULT_ARCLEN_ACCURACY, KurboPathLength, PathLengthOracle};
pub use geometry::shape::{
    RoundingPolicy, ShapeKind, coerce_number, polygon_path_data, shape_length,
};
pub use pipeline::animate::{animate_document, animate_file, animate_str, default_destination};
