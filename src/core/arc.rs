use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

use glam::DVec2;

use super::constants::{EPSILON, PATH_EPSILON};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcDatum {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcDatum {
    pub const fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGenerator {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub corner_radius: f64,
}

impl ArcGenerator {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            corner_radius: 0.0,
        }
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Closed SVG path for `datum`.
    pub fn path(&self, datum: &ArcDatum) -> String {
        let mut path = PathBuilder::default();
        self.trace(datum, &mut path);
        path.close();
        path.finish()
    }

    fn trace(&self, datum: &ArcDatum, path: &mut PathBuilder) {
        let (mut r0, mut r1) = (self.inner_radius, self.outer_radius);
        if r1 < r0 {
            std::mem::swap(&mut r0, &mut r1);
        }
        let a0 = datum.start_angle - FRAC_PI_2;
        let a1 = datum.end_angle - FRAC_PI_2;
        let da = (a1 - a0).abs();
        let cw = a1 > a0;

        if !(r1 > EPSILON) {
            path.move_to(DVec2::ZERO);
            return;
        }

        if da > TAU - EPSILON {
            path.move_to(polar(r1, a0));
            path.arc(DVec2::ZERO, r1, a0, a1, !cw);
            if r0 > EPSILON {
                path.move_to(polar(r0, a1));
                path.arc(DVec2::ZERO, r0, a1, a0, cw);
            }
            return;
        }

        let rc = ((r1 - r0).abs() / 2.0).min(self.corner_radius);
        let (mut rc0, mut rc1) = (rc, rc);

        let p01 = polar(r1, a0);
        let p11 = polar(r1, a1);
        let p10 = polar(r0, a1);
        let p00 = polar(r0, a0);

        // Narrow sectors cannot hold full-size corners.
        if rc > EPSILON && da < PI {
            let oc = if da > EPSILON {
                intersect(p01, p00, p11, p10)
            } else {
                p10
            };
            let a = p01 - oc;
            let b = p11 - oc;
            let kc = 1.0 / ((a.dot(b) / (a.length() * b.length())).acos() / 2.0).sin();
            let lc = oc.length();
            rc0 = rc.min((r0 - lc) / (kc - 1.0));
            rc1 = rc.min((r1 - lc) / (kc + 1.0));
        }

        // Outer ring.
        if !(da > EPSILON) {
            path.move_to(p01);
        } else if rc1 > EPSILON {
            let t0 = corner_tangents(p00, p01, r1, rc1, cw);
            let t1 = corner_tangents(p11, p10, r1, rc1, cw);
            path.move_to(t0.center + t0.p01);
            if rc1 < rc {
                path.arc(t0.center, rc1, angle_of(t0.p01), angle_of(t1.p01), !cw);
            } else {
                path.arc(t0.center, rc1, angle_of(t0.p01), angle_of(t0.p11), !cw);
                path.arc(
                    DVec2::ZERO,
                    r1,
                    angle_of(t0.center + t0.p11),
                    angle_of(t1.center + t1.p11),
                    !cw,
                );
                path.arc(t1.center, rc1, angle_of(t1.p11), angle_of(t1.p01), !cw);
            }
        } else {
            path.move_to(p01);
            path.arc(DVec2::ZERO, r1, a0, a1, !cw);
        }

        // Inner ring, traced backwards.
        if !(r0 > EPSILON) || !(da > EPSILON) {
            path.line_to(p10);
        } else if rc0 > EPSILON {
            let t0 = corner_tangents(p10, p11, r0, -rc0, cw);
            let t1 = corner_tangents(p01, p00, r0, -rc0, cw);
            path.line_to(t0.center + t0.p01);
            if rc0 < rc {
                path.arc(t0.center, rc0, angle_of(t0.p01), angle_of(t1.p01), !cw);
            } else {
                path.arc(t0.center, rc0, angle_of(t0.p01), angle_of(t0.p11), !cw);
                path.arc(
                    DVec2::ZERO,
                    r0,
                    angle_of(t0.center + t0.p11),
                    angle_of(t1.center + t1.p11),
                    cw,
                );
                path.arc(t1.center, rc0, angle_of(t1.p11), angle_of(t1.p01), !cw);
            }
        } else {
            path.arc(DVec2::ZERO, r0, a1, a0, cw);
        }
    }
}

#[inline]
fn polar(r: f64, a: f64) -> DVec2 {
    DVec2::new(r * a.cos(), r * a.sin())
}

#[inline]
fn angle_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Intersection of the line through `p0`,`p1` with the line through `p2`,`p3`.
fn intersect(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> DVec2 {
    let p10 = p1 - p0;
    let p32 = p3 - p2;
    let t = p32.perp_dot(p0 - p2) / p10.perp_dot(p32);
    p0 + t * p10
}

struct CornerTangents {
    center: DVec2,
    p01: DVec2,
    p11: DVec2,
}

// Corner circle of radius `rc` tangent to the radial edge `p0`-`p1` and to the
// ring of radius `r1`. A negative `rc` places the corner on the inner ring.
fn corner_tangents(p0: DVec2, p1: DVec2, r1: f64, rc: f64, cw: bool) -> CornerTangents {
    let p01 = p0 - p1;
    let lo = (if cw { rc } else { -rc }) / p01.length();
    let offset = DVec2::new(lo * p01.y, -lo * p01.x);
    let q11 = p0 + offset;
    let q10 = p1 + offset;
    let mid = (q11 + q10) / 2.0;
    let d = q10 - q11;
    let d2 = d.length_squared();
    let r = r1 - rc;
    let cross = q11.perp_dot(q10);
    let sign = if d.y < 0.0 { -1.0 } else { 1.0 };
    let disc = sign * (r * r * d2 - cross * cross).max(0.0).sqrt();
    let c0 = DVec2::new(
        (cross * d.y - d.x * disc) / d2,
        (-cross * d.x - d.y * disc) / d2,
    );
    let c1 = DVec2::new(
        (cross * d.y + d.x * disc) / d2,
        (-cross * d.x + d.y * disc) / d2,
    );
    let center = if (c0 - mid).length_squared() > (c1 - mid).length_squared() {
        c1
    } else {
        c0
    };
    CornerTangents {
        center,
        p01: -offset,
        p11: center * (r1 / r - 1.0),
    }
}

/// Minimal canvas-style path recorder emitting SVG path data.
#[derive(Default)]
struct PathBuilder {
    out: String,
    start: Option<DVec2>,
    cursor: Option<DVec2>,
}

impl PathBuilder {
    fn move_to(&mut self, p: DVec2) {
        _ = write!(self.out, "M{},{}", p.x, p.y);
        self.start = Some(p);
        self.cursor = Some(p);
    }

    fn line_to(&mut self, p: DVec2) {
        _ = write!(self.out, "L{},{}", p.x, p.y);
        self.cursor = Some(p);
    }

    fn close(&mut self) {
        if self.cursor.is_some() {
            self.cursor = self.start;
            self.out.push('Z');
        }
    }

    /// Circular arc around `center` from `a0` to `a1`, counter-clockwise when `ccw`.
    fn arc(&mut self, center: DVec2, r: f64, a0: f64, a1: f64, ccw: bool) {
        let d = polar(r, a0);
        let p0 = center + d;
        let sweep = u8::from(!ccw);
        let mut da = if ccw { a0 - a1 } else { a1 - a0 };

        match self.cursor {
            None => {
                _ = write!(self.out, "M{},{}", p0.x, p0.y);
            }
            Some(c) if (c.x - p0.x).abs() > PATH_EPSILON || (c.y - p0.y).abs() > PATH_EPSILON => {
                _ = write!(self.out, "L{},{}", p0.x, p0.y);
            }
            Some(_) => {}
        }
        self.cursor = Some(p0);

        if !(r > 0.0) {
            return;
        }
        if da < 0.0 {
            da = da % TAU + TAU;
        }

        if da > TAU - PATH_EPSILON {
            // Full circle: two half arcs.
            let opposite = center - d;
            _ = write!(
                self.out,
                "A{r},{r},0,1,{sweep},{},{}A{r},{r},0,1,{sweep},{},{}",
                opposite.x, opposite.y, p0.x, p0.y
            );
        } else if da > PATH_EPSILON {
            let p1 = center + polar(r, a1);
            let large = u8::from(da >= PI);
            _ = write!(self.out, "A{r},{r},0,{large},{sweep},{},{}", p1.x, p1.y);
            self.cursor = Some(p1);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
