use std::time::Duration;

use super::arc::ArcDatum;

/// Exponential ease-out: fast start, long settle.
#[inline]
pub fn ease_exp_out(t: f64) -> f64 {
    1.0 - 2f64.powf(-10.0 * t)
}

#[inline]
pub fn interpolate(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub finished: bool,
}

impl Transition {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }

    /// Value after `elapsed`. The last sample is exactly `to`.
    pub fn sample(&self, elapsed: Duration) -> Sample {
        if elapsed >= self.duration {
            return Sample {
                value: self.to,
                finished: true,
            };
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        Sample {
            value: interpolate(self.from, self.to, ease_exp_out(t)),
            finished: false,
        }
    }
}

/// The mutable clip datum plus the generation of the transition driving it.
#[derive(Clone, Debug, Default)]
pub struct ClipState {
    datum: Option<ArcDatum>,
    generation: u64,
}

impl ClipState {
    pub fn datum(&self) -> Option<ArcDatum> {
        self.datum
    }

    /// Current datum re-anchored at `start_angle`; the first call places the
    /// end at `initial_end`.
    pub fn anchor(&mut self, start_angle: f64, initial_end: f64) -> ArcDatum {
        let datum = self
            .datum
            .get_or_insert(ArcDatum::new(start_angle, initial_end));
        datum.start_angle = start_angle;
        *datum
    }

    /// Start a transition from the current end angle towards `to`. Any earlier
    /// transition stops being current.
    pub fn begin(&mut self, to: f64, duration: Duration) -> (u64, Transition) {
        self.generation = self.generation.wrapping_add(1);
        let from = self.datum.map(|d| d.end_angle).unwrap_or(to);
        (self.generation, Transition::new(from, to, duration))
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Write a sampled end angle. Ignored for superseded generations.
    pub fn set_end_angle(&mut self, generation: u64, end_angle: f64) -> Option<ArcDatum> {
        if !self.is_current(generation) {
            return None;
        }
        let datum = self.datum.as_mut()?;
        datum.end_angle = end_angle;
        Some(*datum)
    }

    /// Stop whatever is running and forget the datum.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.datum = None;
    }
}
