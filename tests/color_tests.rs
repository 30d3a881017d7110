// Host-side tests for color parsing and the gradient channel math.

#![allow(dead_code)]
mod common;

use common::approx;
use common::core::color::{gradient_color, Rgb};

fn close(a: Rgb, b: Rgb) -> bool {
    approx(a.r, b.r) && approx(a.g, b.g) && approx(a.b, b.b)
}

#[test]
fn parses_hex_forms() {
    assert_eq!(Rgb::parse("#00b7a8"), Some(Rgb::new(0.0, 183.0, 168.0)));
    assert_eq!(Rgb::parse("#ddd"), Some(Rgb::new(221.0, 221.0, 221.0)));
    assert_eq!(Rgb::parse("  #FFF "), Some(Rgb::new(255.0, 255.0, 255.0)));
    assert_eq!(Rgb::parse("#12345"), None);
    assert_eq!(Rgb::parse("#zzz"), None);
}

#[test]
fn parses_functional_forms() {
    assert_eq!(Rgb::parse("rgb(1, 2, 3)"), Some(Rgb::new(1.0, 2.0, 3.0)));
    assert_eq!(Rgb::parse("rgba(10,20,30,0.5)"), Some(Rgb::new(10.0, 20.0, 30.0)));
    assert_eq!(Rgb::parse("rgb(100%, 0%, 50%)"), Some(Rgb::new(255.0, 0.0, 127.5)));
    assert_eq!(Rgb::parse("rgb(1, 2)"), None);

    let red = Rgb::parse("hsl(0, 100%, 50%)").expect("hsl parses");
    assert!(close(red, Rgb::new(255.0, 0.0, 0.0)));
    let green = Rgb::parse("hsla(120, 100%, 50%, 1)").expect("hsla parses");
    assert!(close(green, Rgb::new(0.0, 255.0, 0.0)));
}

#[test]
fn parses_named_colors() {
    assert_eq!(Rgb::parse("teal"), Some(Rgb::new(0.0, 128.0, 128.0)));
    assert_eq!(Rgb::parse("Black"), Some(Rgb::new(0.0, 0.0, 0.0)));
    assert_eq!(Rgb::parse("notacolor"), None);
}

#[test]
fn darker_and_brighter_scale_channels() {
    let c = Rgb::new(100.0, 50.0, 10.0);
    assert!(close(c.darker(1.0), Rgb::new(70.0, 35.0, 7.0)));
    assert!(close(c.brighter(1.0), Rgb::new(100.0 / 0.7, 50.0 / 0.7, 10.0 / 0.7)));
    assert!(close(c.darker(0.5).brighter(0.5), c));
    assert!(close(c.darker(0.0), c));
}

#[test]
fn display_rounds_and_clamps() {
    assert_eq!(Rgb::new(0.4, 127.5, 300.0).to_string(), "rgb(0, 128, 255)");
    assert_eq!(Rgb::new(-5.0, f64::NAN, 254.6).to_string(), "rgb(0, 0, 255)");
}

#[test]
fn gradient_color_hits_endpoints() {
    let base = Rgb::parse("#00b7a8").expect("default parses");
    let (from, to) = (base.darker(0.5), base.brighter(0.5));
    assert!(close(gradient_color(from, to, 0.0), from));
    assert!(close(gradient_color(from, to, 100.0), to));

    let mid = gradient_color(from, to, 50.0);
    assert!(approx(mid.g, (from.g + to.g) / 2.0));
}

#[test]
fn gradient_brightens_monotonically() {
    let base = Rgb::new(0.0, 183.0, 168.0);
    let (from, to) = (base.darker(0.5), base.brighter(0.5));
    let mut last = f64::NEG_INFINITY;
    for p in 0..=100 {
        let g = gradient_color(from, to, p as f64).g;
        assert!(g >= last);
        last = g;
    }
}
