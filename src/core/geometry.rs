use std::f64::consts::TAU;
use std::time::Duration;

use super::arc::{ArcDatum, ArcGenerator};
use super::color::{gradient_color, Rgb};
use super::config::GaugeConfig;
use super::constants::{
    CHART_HEIGHT, DEFAULT_BASE_COLOR, GRADIENT_BRIGHTER_K, GRADIENT_DARKER_K, GRADIENT_SLICES,
};

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Angular span of the gauge in radians: a full turn minus the gap.
#[inline]
pub fn perimeter(circle_gap_deg: f64) -> f64 {
    deg_to_rad(360.0 - circle_gap_deg)
}

/// Map a percentage onto the gauge: 0% sits at `-perimeter/2`, 100% at
/// `+perimeter/2`. Linear and unclamped, so out-of-range values overshoot.
#[inline]
pub fn value_to_angle(value: f64, perimeter: f64) -> f64 {
    value * perimeter / 100.0 - perimeter / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    pub start: f64,
    pub end: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusRange {
    pub inner: f64,
    pub outer: f64,
}

/// Everything one redraw needs, derived from the container width and config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartAttributes {
    pub width: f64,
    pub height: f64,
    pub duration: Duration,
    pub perimeter: f64,
    pub angles: AngleRange,
    pub radius: RadiusRange,
    pub base_color: Rgb,
}

impl ChartAttributes {
    pub fn new(width: f64, config: &GaugeConfig) -> Self {
        let perimeter = perimeter(config.circle_gap_deg);
        let lateral_offset = (TAU - perimeter) / 2.0;
        let height = CHART_HEIGHT;
        let base_color = Rgb::parse(&config.base_color).unwrap_or_else(|| {
            log::warn!(
                "[geometry] unparseable base color {:?}, using {}",
                config.base_color,
                DEFAULT_BASE_COLOR
            );
            Rgb::parse(DEFAULT_BASE_COLOR).unwrap_or(Rgb::new(0.0, 183.0, 168.0))
        });
        Self {
            width,
            height,
            duration: config.transition_duration(),
            perimeter,
            angles: AngleRange {
                start: -TAU / 2.0 + lateral_offset,
                end: TAU / 2.0 - lateral_offset,
            },
            radius: RadiusRange {
                inner: height / 2.0 - config.circle_thickness_px,
                outer: height / 2.0,
            },
            base_color,
        }
    }

    #[inline]
    pub fn angle_for(&self, percentage: f64) -> f64 {
        value_to_angle(percentage, self.perimeter)
    }

    pub fn corner_radius(&self) -> f64 {
        (self.radius.outer - self.radius.inner) / 2.0
    }

    /// Rounded ring used for the background and for the progress clip.
    pub fn gauge_arc(&self) -> ArcGenerator {
        ArcGenerator::new(self.radius.inner, self.radius.outer)
            .with_corner_radius(self.corner_radius())
    }

    /// Square-cornered ring used for the gradient slices.
    pub fn slice_arc(&self) -> ArcGenerator {
        ArcGenerator::new(self.radius.inner, self.radius.outer)
    }

    pub fn background_datum(&self) -> ArcDatum {
        ArcDatum::new(self.angles.start, self.angles.end)
    }

    /// Clip datum at `end_angle`, anchored at the start of the gauge.
    pub fn clip_datum(&self, end_angle: f64) -> ArcDatum {
        ArcDatum::new(self.angles.start, end_angle)
    }

    pub fn translate(&self) -> String {
        format!("translate({}, {})", self.width / 2.0, self.height / 2.0)
    }

    pub fn gradient_endpoints(&self) -> (Rgb, Rgb) {
        (
            self.base_color.darker(GRADIENT_DARKER_K),
            self.base_color.brighter(GRADIENT_BRIGHTER_K),
        )
    }

    /// Slices that together paint the gradient ring. Slice `i` covers
    /// `[i/2, i/2 + 1]` percent, so neighbours overlap by half a percent and
    /// no seams show between them.
    pub fn gradient_slices(&self) -> Vec<GradientSlice> {
        let (darker, brighter) = self.gradient_endpoints();
        (0..GRADIENT_SLICES)
            .map(|i| {
                let from = i as f64 / 2.0;
                let percentage = from + 1.0;
                GradientSlice {
                    datum: ArcDatum::new(
                        self.angle_for(from),
                        self.angle_for(percentage),
                    ),
                    fill: gradient_color(darker, brighter, percentage),
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSlice {
    pub datum: ArcDatum,
    pub fill: Rgb,
}
