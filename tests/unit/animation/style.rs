use std::num::NonZeroU32;

use super::*;
use crate::animation::config::{Direction, IterationCount, TimingFunction};

#[test]
fn lengths_print_like_the_original_output() {
    assert_eq!(format_length(62.83185307179586), "62.83185307179586");
    assert_eq!(format_length(14.0), "14");
    assert_eq!(format_length(0.0), "0");
    assert_eq!(format_length(-0.0), "0");
    assert_eq!(format_length(0.5), "0.5");
    assert_eq!(format_length(f64::NAN), "NaN");
    assert_eq!(format_length(f64::INFINITY), "Infinity");
    assert_eq!(format_length(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_length(1e21), "1e+21");
    assert_eq!(format_length(1.5e-7), "1.5e-7");
}

#[test]
fn default_declarations_have_the_documented_shape() {
    assert_eq!(
        animation_declarations(62.83185307179586, &AnimationConfig::default()),
        "stroke-dasharray:62.83185307179586;stroke-dashoffset:62.83185307179586;animation: animateLine 1500ms linear 0ms 1 forwards;"
    );
}

#[test]
fn declarations_render_every_config_field() {
    let cfg = AnimationConfig {
        duration_ms: 2000,
        delay_ms: 250,
        iteration_count: IterationCount::Count(NonZeroU32::new(3).unwrap()),
        timing: TimingFunction::EaseInOut,
        direction: Direction::AlternateReverse,
    };
    assert_eq!(
        animation_declarations(14.0, &cfg),
        "stroke-dasharray:14;stroke-dashoffset:14;animation: animateLine 2000ms ease-in-out 250ms 3 alternate-reverse;"
    );

    let forever = AnimationConfig {
        iteration_count: IterationCount::Infinite,
        ..AnimationConfig::default()
    };
    assert!(animation_declarations(1.0, &forever).contains(" 0ms infinite forwards;"));
}

#[test]
fn apply_animation_creates_style_attribute() {
    let mut node = DocumentNode::new("rect");
    apply_animation(&mut node, 14.0, &AnimationConfig::default());
    assert_eq!(
        node.attr("style"),
        Some("stroke-dasharray:14;stroke-dashoffset:14;animation: animateLine 1500ms linear 0ms 1 forwards;")
    );
}

#[test]
fn apply_animation_keeps_existing_style_in_front() {
    let mut node = DocumentNode::new("rect")
        .with_attr("style", "stroke:red")
        .with_attr("width", "3");
    apply_animation(&mut node, 14.0, &AnimationConfig::default());
    let style = node.attr("style").unwrap();
    assert!(style.starts_with("stroke:red;stroke-dasharray:14;"), "{style}");

    let keys: Vec<_> = node.attributes.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["style", "width"]);
}

#[test]
fn empty_existing_style_gets_no_separator() {
    let mut node = DocumentNode::new("line").with_attr("style", "");
    apply_animation(&mut node, 5.0, &AnimationConfig::default());
    assert!(node.attr("style").unwrap().starts_with("stroke-dasharray:5;"));
}

#[test]
fn keyframe_block_refers_to_the_shared_name() {
    assert!(KEYFRAME_BLOCK.starts_with(&format!("@keyframes {KEYFRAME_NAME}{{")));
}
