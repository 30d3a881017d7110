// Host-side tests for the gauge layout: angles, radii and gradient slices.

#![allow(dead_code)]
mod common;

use common::approx;
use common::core::color::Rgb;
use common::core::config::GaugeConfig;
use common::core::geometry::{perimeter, value_to_angle, ChartAttributes};
use std::f64::consts::{PI, TAU};
use std::time::Duration;

fn attrs(width: f64) -> ChartAttributes {
    ChartAttributes::new(width, &GaugeConfig::default())
}

#[test]
fn perimeter_is_full_turn_minus_gap() {
    assert!(approx(perimeter(60.0), 300f64.to_radians()));
    assert!(approx(perimeter(60.0), 5.235987755982989));
    assert!(approx(perimeter(0.0), TAU));
    assert!(approx(perimeter(180.0), PI));
}

#[test]
fn zero_and_hundred_sit_at_the_gap_edges() {
    let p = perimeter(60.0);
    assert!(approx(value_to_angle(0.0, p), -p / 2.0));
    assert!(approx(value_to_angle(100.0, p), p / 2.0));
    assert!(approx(value_to_angle(50.0, p), 0.0));
    // Overshoot is linear.
    assert!(approx(value_to_angle(150.0, p), p));
}

#[test]
fn angle_range_matches_value_mapping() {
    let a = attrs(400.0);
    assert!(approx(a.angles.start, a.angle_for(0.0)));
    assert!(approx(a.angles.end, a.angle_for(100.0)));
    assert!(a.angles.start < 0.0 && a.angles.end > 0.0);
}

#[test]
fn radii_follow_height_and_thickness() {
    let a = attrs(400.0);
    assert_eq!(a.height, 175.0);
    assert_eq!(a.radius.outer, 87.5);
    assert_eq!(a.radius.inner, 77.5);
    assert_eq!(a.corner_radius(), 5.0);
    assert_eq!(a.gauge_arc().corner_radius, 5.0);
    assert_eq!(a.slice_arc().corner_radius, 0.0);

    let config = GaugeConfig {
        circle_thickness_px: 20.0,
        ..GaugeConfig::default()
    };
    let a = ChartAttributes::new(400.0, &config);
    assert_eq!(a.radius.inner, 67.5);
    assert_eq!(a.corner_radius(), 10.0);
}

#[test]
fn group_is_centered_in_the_chart() {
    assert_eq!(attrs(400.0).translate(), "translate(200, 87.5)");
    assert_eq!(attrs(0.0).translate(), "translate(0, 87.5)");
}

#[test]
fn duration_comes_from_config() {
    let config = GaugeConfig {
        transition_ms: 250.0,
        ..GaugeConfig::default()
    };
    assert_eq!(ChartAttributes::new(10.0, &config).duration, Duration::from_millis(250));
}

#[test]
fn unparseable_base_color_falls_back() {
    let config = GaugeConfig {
        base_color: "not a color".to_string(),
        ..GaugeConfig::default()
    };
    let a = ChartAttributes::new(100.0, &config);
    assert_eq!(a.base_color, Rgb::new(0.0, 183.0, 168.0));
}

#[test]
fn datums_start_at_the_gauge_start() {
    let a = attrs(400.0);
    let background = a.background_datum();
    assert_eq!(background.start_angle, a.angles.start);
    assert_eq!(background.end_angle, a.angles.end);
    let clip = a.clip_datum(0.25);
    assert_eq!(clip.start_angle, a.angles.start);
    assert_eq!(clip.end_angle, 0.25);
}

#[test]
fn two_hundred_overlapping_slices() {
    let a = attrs(400.0);
    let slices = a.gradient_slices();
    assert_eq!(slices.len(), 200);

    let first = &slices[0];
    assert!(approx(first.datum.start_angle, a.angle_for(0.0)));
    assert!(approx(first.datum.end_angle, a.angle_for(1.0)));

    let last = &slices[199];
    assert!(approx(last.datum.start_angle, a.angle_for(99.5)));
    assert!(approx(last.datum.end_angle, a.angle_for(100.5)));

    for pair in slices.windows(2) {
        assert!(pair[1].datum.start_angle < pair[0].datum.end_angle);
        assert!(pair[1].datum.start_angle > pair[0].datum.start_angle);
    }
}

#[test]
fn slice_fill_is_the_gradient_at_its_end() {
    let a = attrs(400.0);
    let (darker, brighter) = a.gradient_endpoints();
    let slices = a.gradient_slices();

    let expected = darker.lerp(brighter, 0.01);
    assert!(approx(slices[0].fill.g, expected.g));
    // Fills brighten from start to end of the ring.
    assert!(slices[199].fill.g > slices[0].fill.g);
    assert!(slices[99].fill.g > darker.g && slices[99].fill.g < brighter.g);
}

#[test]
fn gradient_endpoints_straddle_base_color() {
    let a = attrs(400.0);
    let (darker, brighter) = a.gradient_endpoints();
    assert!(darker.g < a.base_color.g);
    assert!(brighter.g > a.base_color.g);
    assert!(approx(darker.g, 183.0 * 0.7f64.sqrt()));
}
