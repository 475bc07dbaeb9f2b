use super::*;
use crate::geometry::path_length::KurboPathLength;

struct FixedLength(f64);

impl PathLengthOracle for FixedLength {
    fn total_length(&self, _d: &str) -> SvgLineResult<f64> {
        Ok(self.0)
    }
}

fn length(node: &DocumentNode) -> Option<f64> {
    shape_length(node, ShapeKind::of(&node.name), &KurboPathLength::default()).unwrap()
}

#[test]
fn kinds_resolve_from_tag_names() {
    assert_eq!(ShapeKind::of("circle"), ShapeKind::Circle);
    assert_eq!(ShapeKind::of("polyline"), ShapeKind::Polyline);
    assert_eq!(ShapeKind::of("style"), ShapeKind::Style);
    assert_eq!(ShapeKind::of("g"), ShapeKind::Container);
    assert_eq!(ShapeKind::of("ellipse"), ShapeKind::Container);
    assert_eq!(ShapeKind::of("Circle"), ShapeKind::Container);
}

#[test]
fn rounding_table_matches_kinds() {
    assert_eq!(ShapeKind::Circle.rounding(), RoundingPolicy::Raw);
    assert_eq!(ShapeKind::Line.rounding(), RoundingPolicy::Raw);
    assert_eq!(ShapeKind::Rect.rounding(), RoundingPolicy::Ceil);
    assert_eq!(ShapeKind::Path.rounding(), RoundingPolicy::Ceil);
    assert_eq!(ShapeKind::Polygon.rounding(), RoundingPolicy::Ceil);
    assert_eq!(ShapeKind::Polyline.rounding(), RoundingPolicy::Ceil);
}

#[test]
fn coerce_number_follows_loose_numeric_rules() {
    assert_eq!(coerce_number(None), 0.0);
    assert_eq!(coerce_number(Some("")), 0.0);
    assert_eq!(coerce_number(Some("  ")), 0.0);
    assert_eq!(coerce_number(Some(" 12.5 ")), 12.5);
    assert_eq!(coerce_number(Some("1e2")), 100.0);
    assert_eq!(coerce_number(Some("-Infinity")), f64::NEG_INFINITY);
    assert!(coerce_number(Some("10px")).is_nan());
    assert!(coerce_number(Some("inf")).is_nan());
    assert!(coerce_number(Some("abc")).is_nan());
}

#[test]
fn coerce_number_reads_radix_prefixed_integers() {
    assert_eq!(coerce_number(Some("0x10")), 16.0);
    assert_eq!(coerce_number(Some(" 0XfF ")), 255.0);
    assert_eq!(coerce_number(Some("0o17")), 15.0);
    assert_eq!(coerce_number(Some("0b101")), 5.0);
    assert!(coerce_number(Some("0x")).is_nan());
    assert!(coerce_number(Some("0x1g")).is_nan());
    assert!(coerce_number(Some("0b102")).is_nan());
    assert!(coerce_number(Some("-0x10")).is_nan());

    let c = DocumentNode::new("circle").with_attr("r", "0x10");
    assert_eq!(length(&c), Some(2.0 * PI * 16.0));
}

#[test]
fn circle_is_two_pi_r_unrounded() {
    let c = DocumentNode::new("circle").with_attr("r", "10");
    assert_eq!(length(&c), Some(62.83185307179586));
    let r0 = DocumentNode::new("circle").with_attr("r", "0");
    assert_eq!(length(&r0), Some(0.0));
}

#[test]
fn rect_is_ceiled_perimeter() {
    let r = DocumentNode::new("rect")
        .with_attr("width", "3")
        .with_attr("height", "4");
    assert_eq!(length(&r), Some(14.0));
    let frac = DocumentNode::new("rect")
        .with_attr("width", "1.1")
        .with_attr("height", "1");
    assert_eq!(length(&frac), Some(5.0));
}

#[test]
fn line_is_euclidean_with_missing_endpoints_at_zero() {
    let l = DocumentNode::new("line")
        .with_attr("x1", "1")
        .with_attr("y1", "1")
        .with_attr("x2", "4")
        .with_attr("y2", "5");
    assert_eq!(length(&l), Some(5.0));
    let partial = DocumentNode::new("line").with_attr("x2", "3").with_attr("y2", "4");
    assert_eq!(length(&partial), Some(5.0));
    let frac = DocumentNode::new("line").with_attr("x2", "1").with_attr("y2", "1");
    assert_eq!(length(&frac), Some(2f64.sqrt()));
}

#[test]
fn non_numeric_geometry_surfaces_as_nan() {
    let c = DocumentNode::new("circle").with_attr("r", "ten");
    assert!(length(&c).unwrap().is_nan());
    let r = DocumentNode::new("rect")
        .with_attr("width", "auto")
        .with_attr("height", "4");
    assert!(length(&r).unwrap().is_nan());
}

#[test]
fn path_length_is_ceiled_oracle_value() {
    let node = DocumentNode::new("path").with_attr("d", "M0 0L1 1");
    assert_eq!(length(&node), Some(2.0));
    let stub = shape_length(&node, ShapeKind::Path, &FixedLength(7.2)).unwrap();
    assert_eq!(stub, Some(8.0));
}

#[test]
fn polygon_path_data_from_comma_pairs() {
    assert_eq!(polygon_path_data("0,0 10,0 10,10"), "M0,0L10,0L10,10z");
}

#[test]
fn polygon_path_data_from_flat_tokens() {
    assert_eq!(polygon_path_data("0 0  10 0\n10 10"), "M0,0L10,0L10,10z");
    assert_eq!(polygon_path_data("0 0 10"), "M0,0L10,z");
}

#[test]
fn polygon_length_ignores_token_style() {
    let commas = DocumentNode::new("polygon").with_attr("points", "0,0 10,0 10,10");
    let flat = DocumentNode::new("polygon").with_attr("points", "0 0 10 0 10 10");
    assert_eq!(length(&commas), length(&flat));
    assert_eq!(length(&commas), Some((20.0 + 200f64.sqrt()).ceil()));
}

#[test]
fn polyline_measures_the_implicit_closing_segment() {
    let polyline = DocumentNode::new("polyline").with_attr("points", "0,0 10,0 10,10");
    assert_eq!(length(&polyline), Some(35.0));
}

#[test]
fn missing_oracle_input_is_fatal() {
    let oracle = KurboPathLength::default();
    let path = DocumentNode::new("path");
    assert!(matches!(
        shape_length(&path, ShapeKind::Path, &oracle),
        Err(SvgLineError::Geometry(_))
    ));
    let poly = DocumentNode::new("polyline");
    assert!(matches!(
        shape_length(&poly, ShapeKind::Polyline, &oracle),
        Err(SvgLineError::Geometry(_))
    ));
    let odd = DocumentNode::new("polygon").with_attr("points", "0 0 10");
    assert!(shape_length(&odd, ShapeKind::Polygon, &oracle).is_err());
}

#[test]
fn non_drawable_kinds_have_no_length() {
    let g = DocumentNode::new("g");
    let oracle = KurboPathLength::default();
    assert_eq!(shape_length(&g, ShapeKind::Container, &oracle).unwrap(), None);
    assert_eq!(shape_length(&g, ShapeKind::Style, &oracle).unwrap(), None);
}
