//! Synthetic train for exercising the pipeline without a sonar.
//!
//! Trains arrive one after another, each pass lasting a fixed time. During a
//! pass the train approaches the sensor at that pass's speed, stops at the
//! closest distance (or at the pass midpoint, whichever comes first) and backs
//! out at the same speed so it is at the start distance again when the pass
//! ends. Consecutive passes join without a jump. A small sinusoidal wobble
//! stands in for sonar jitter. A pass speed of zero models a train standing in
//! front of the sensor.

use core::f32::consts::TAU;

/// Pass speeds cycled by [`SyntheticTrain::demo`], in cm/s.
pub const DEMO_PASS_SPEEDS: [f32; 6] = [20.0, 0.0, 35.0, 4.0, 55.0, 12.0];

/// Distance at which a pass starts, in centimeters.
pub const DEFAULT_START_CM: f32 = 250.0;

/// Distance at which an approaching train stops, in centimeters.
pub const DEFAULT_CLOSEST_CM: f32 = 15.0;

/// Duration of one pass, in seconds.
pub const DEFAULT_PASS_DURATION_S: f32 = 12.0;

/// Peak sonar jitter, in centimeters.
pub const DEFAULT_WOBBLE_CM: f32 = 0.4;

/// Jitter frequency in Hz. Not a multiple of the sample rate, so samples land
/// on different phases of the wobble.
const WOBBLE_HZ: f32 = 1.7;

/// Deterministic distance profile of a sequence of approaching trains.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticTrain<'a> {
    pass_speeds_cm_s: &'a [f32],
    pass_duration_s: f32,
    start_cm: f32,
    closest_cm: f32,
    wobble_cm: f32,
}

impl SyntheticTrain<'static> {
    /// Demo profile cycling through [`DEMO_PASS_SPEEDS`].
    pub const fn demo() -> Self { Self::new(&DEMO_PASS_SPEEDS) }
}

impl<'a> SyntheticTrain<'a> {
    /// Profile with the default geometry and the given pass speeds.
    pub const fn new(pass_speeds_cm_s: &'a [f32]) -> Self {
        Self {
            pass_speeds_cm_s,
            pass_duration_s: DEFAULT_PASS_DURATION_S,
            start_cm: DEFAULT_START_CM,
            closest_cm: DEFAULT_CLOSEST_CM,
            wobble_cm: DEFAULT_WOBBLE_CM,
        }
    }

    /// Override start distance, closest distance and pass duration.
    pub const fn with_geometry(
        mut self,
        start_cm: f32,
        closest_cm: f32,
        pass_duration_s: f32,
    ) -> Self {
        self.start_cm = start_cm;
        self.closest_cm = closest_cm;
        self.pass_duration_s = pass_duration_s;
        self
    }

    /// Override the jitter amplitude (0 for a noise-free profile).
    pub const fn with_wobble(
        mut self,
        wobble_cm: f32,
    ) -> Self {
        self.wobble_cm = wobble_cm;
        self
    }

    /// Index of the pass running at `t_s` seconds.
    pub fn pass_index(
        &self,
        t_s: f32,
    ) -> usize {
        if self.pass_duration_s <= 0.0 {
            return 0;
        }
        (t_s.max(0.0) / self.pass_duration_s) as usize
    }

    /// Approach speed of the pass running at `t_s`, in cm/s.
    pub fn pass_speed(
        &self,
        t_s: f32,
    ) -> f32 {
        if self.pass_speeds_cm_s.is_empty() {
            return 0.0;
        }
        self.pass_speeds_cm_s[self.pass_index(t_s) % self.pass_speeds_cm_s.len()]
    }

    /// Distance the sonar would report at `t_s` seconds, in centimeters.
    pub fn distance_at(
        &self,
        t_s: f32,
    ) -> u16 {
        let t_s = t_s.max(0.0);
        let pass_start_s = self.pass_index(t_s) as f32 * self.pass_duration_s;
        let into_pass_s = t_s - pass_start_s;
        let speed = self.pass_speed(t_s);

        // Time spent approaching, and again backing out
        let approach_s = if speed > 0.0 {
            ((self.start_cm - self.closest_cm).max(0.0) / speed).min(self.pass_duration_s / 2.0)
        } else {
            0.0
        };
        let moving_s = if into_pass_s < approach_s {
            into_pass_s
        } else if into_pass_s < self.pass_duration_s - approach_s {
            approach_s
        } else {
            (self.pass_duration_s - into_pass_s).max(0.0)
        };
        let distance_cm = self.start_cm - speed * moving_s;
        let jitter_cm = self.wobble_cm * micromath::F32(TAU * WOBBLE_HZ * t_s).sin().0;

        // `as` saturates, rounding to the nearest centimeter like the sensor
        (distance_cm + jitter_cm + 0.5).max(0.0) as u16
    }
}
