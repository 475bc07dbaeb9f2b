use std::f64::consts::PI;

use crate::{
    document::node::DocumentNode,
    foundation::error::{SvgLineError, SvgLineResult},
    geometry::path_length::PathLengthOracle,
};

/// Closed set of element kinds the tree walk dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `<circle>`
    Circle,
    /// `<rect>`
    Rect,
    /// `<path>`
    Path,
    /// `<line>`
    Line,
    /// `<polygon>`
    Polygon,
    /// `<polyline>`
    Polyline,
    /// `<style>`: receives the keyframe block instead of a length.
    Style,
    /// Anything else; the walk recurses into its children.
    Container,
}

/// How a raw traversal length is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Round up to the next integer.
    Ceil,
    /// Keep the fractional value.
    Raw,
}

impl RoundingPolicy {
    /// Apply the policy to a raw length. Non-finite input passes through.
    pub fn apply(self, raw: f64) -> f64 {
        match self {
            Self::Ceil => raw.ceil(),
            Self::Raw => raw,
        }
    }
}

impl ShapeKind {
    /// Classify a tag name. Unknown names are containers.
    pub fn of(name: &str) -> Self {
        match name {
            "circle" => Self::Circle,
            "rect" => Self::Rect,
            "path" => Self::Path,
            "line" => Self::Line,
            "polygon" => Self::Polygon,
            "polyline" => Self::Polyline,
            "style" => Self::Style,
            _ => Self::Container,
        }
    }

    /// Rounding applied to this kind's length. Circles and lines report the raw value.
    pub fn rounding(self) -> RoundingPolicy {
        match self {
            Self::Circle | Self::Line => RoundingPolicy::Raw,
            Self::Rect | Self::Path | Self::Polygon | Self::Polyline => RoundingPolicy::Ceil,
            Self::Style | Self::Container => RoundingPolicy::Raw,
        }
    }
}

/// Read a geometry attribute as a number.
///
/// Absent or blank values are `0`. Unsigned `0x`/`0o`/`0b` integer literals are read in their
/// radix. Anything else that is not a plain decimal number is `NaN`, which then shows up
/// verbatim in the generated style.
pub fn coerce_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let s = raw.trim();
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_integer(&s[2..], radix);
    }
    match s {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if s
            .bytes()
            .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) =>
        {
            f64::NAN
        }
        _ => s.parse().unwrap_or(f64::NAN),
    }
}

fn parse_radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Build path data that traces a `points` list.
///
/// Tokens are whitespace separated. If the list contains a comma every token is an `x,y`
/// pair; otherwise consecutive tokens are paired up. The outline is always closed with `z`,
/// polylines included.
pub fn polygon_path_data(points: &str) -> String {
    let tokens: Vec<&str> = points.split_whitespace().collect();
    let pairs: Vec<String> = if points.contains(',') {
        // Each token already reads `x,y`.
        tokens.iter().map(|t| t.to_string()).collect()
    } else {
        tokens
            .chunks(2)
            .map(|c| format!("{},{}", c[0], c.get(1).copied().unwrap_or_default()))
            .collect()
    };

    let mut d = String::new();
    for (i, pair) in pairs.iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(pair);
    }
    d.push('z');
    d
}

fn circle_length(node: &DocumentNode) -> f64 {
    2.0 * PI * coerce_number(node.attr("r"))
}

fn rect_length(node: &DocumentNode) -> f64 {
    coerce_number(node.attr("width")) * 2.0 + coerce_number(node.attr("height")) * 2.0
}

fn line_length(node: &DocumentNode) -> f64 {
    let x1 = coerce_number(node.attr("x1"));
    let x2 = coerce_number(node.attr("x2"));
    let y1 = coerce_number(node.attr("y1"));
    let y2 = coerce_number(node.attr("y2"));
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

fn required<'a>(node: &'a DocumentNode, key: &str) -> SvgLineResult<&'a str> {
    node.attr(key).ok_or_else(|| {
        SvgLineError::geometry(format!("<{}> has no '{key}' attribute", node.name))
    })
}

/// Traversal length of `node` treated as `kind`, after the kind's rounding policy.
///
/// Returns `None` for kinds that are not drawable.
pub fn shape_length(
    node: &DocumentNode,
    kind: ShapeKind,
    oracle: &dyn PathLengthOracle,
) -> SvgLineResult<Option<f64>> {
    let raw = match kind {
        ShapeKind::Circle => circle_length(node),
        ShapeKind::Rect => rect_length(node),
        ShapeKind::Line => line_length(node),
        ShapeKind::Path => oracle.total_length(required(node, "d")?)?,
        ShapeKind::Polygon | ShapeKind::Polyline => {
            oracle.total_length(&polygon_path_data(required(node, "points")?))?
        }
        ShapeKind::Style | ShapeKind::Container => return Ok(None),
    };
    Ok(Some(kind.rounding().apply(raw)))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shape.rs"]
mod tests;
