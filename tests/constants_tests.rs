// Host-side tests for constants and their relationships.

#![allow(dead_code)]
mod common;

use common::core::color::Rgb;
use common::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_sit_inside_declared_ranges() {
    assert!((CIRCLE_GAP_MIN_DEG..=CIRCLE_GAP_MAX_DEG).contains(&DEFAULT_CIRCLE_GAP_DEG));
    assert!(
        (CIRCLE_THICKNESS_MIN_PX..=CIRCLE_THICKNESS_MAX_PX).contains(&DEFAULT_CIRCLE_THICKNESS_PX)
    );
    assert!(DEFAULT_TRANSITION_MS >= TRANSITION_MIN_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_fits_inside_chart() {
    // The thickest ring must still leave a positive inner radius.
    assert!(CHART_HEIGHT / 2.0 - CIRCLE_THICKNESS_MAX_PX > 0.0);
}

#[test]
fn gradient_has_two_slices_per_percent() {
    assert_eq!(GRADIENT_SLICES, 200);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn darker_factor_darkens() {
    assert!(DARKER_FACTOR > 0.0 && DARKER_FACTOR < 1.0);
}

#[test]
fn default_colors_parse() {
    assert_eq!(Rgb::parse(DEFAULT_BASE_COLOR), Some(Rgb::new(0.0, 183.0, 168.0)));
    assert_eq!(Rgb::parse(DEFAULT_TEXT_COLOR), Some(Rgb::new(0.0, 0.0, 0.0)));
    assert!(Rgb::parse(BACKGROUND_FILL).is_some());
}

#[test]
fn requires_two_measures() {
    assert_eq!(REQUIRED_MEASURES, 2);
}
