use crate::{animation::config::AnimationConfig, document::node::DocumentNode};

/// Name of the keyframe rule every animated shape refers to.
pub const KEYFRAME_NAME: &str = "animateLine";

/// Global rule that drives `stroke-dashoffset` to zero.
pub const KEYFRAME_BLOCK: &str = "@keyframes animateLine{to{stroke-dashoffset:0;}}";

/// Render a length the way the generated CSS has always spelled numbers:
/// shortest round-trip decimal, exponent form outside `[1e-6, 1e21)`, and the
/// `NaN` / `Infinity` spellings for non-finite values.
pub fn format_length(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{v}");
    }
    let exp = format!("{v:e}");
    match exp.split_once('e') {
        Some((mantissa, e)) if !e.starts_with('-') => format!("{mantissa}e+{e}"),
        _ => exp,
    }
}

/// Stroke-dash and `animation` declarations for one shape.
pub fn animation_declarations(length: f64, cfg: &AnimationConfig) -> String {
    let len = format_length(length);
    format!(
        "stroke-dasharray:{len};stroke-dashoffset:{len};animation: {KEYFRAME_NAME} {}ms {} {}ms {} {};",
        cfg.duration_ms, cfg.timing, cfg.delay_ms, cfg.iteration_count, cfg.direction
    )
}

/// Append the animation declarations to `node`'s inline style.
///
/// A non-empty existing style is kept in front, followed by a `;` separator.
pub fn apply_animation(node: &mut DocumentNode, length: f64, cfg: &AnimationConfig) {
    let decls = animation_declarations(length, cfg);
    let style = match node.attr("style") {
        Some(existing) if !existing.is_empty() => format!("{existing};{decls}"),
        _ => decls,
    };
    node.attributes.set("style", style);
}

#[cfg(test)]
#[path = "../../tests/unit/animation/style.rs"]
mod tests;
