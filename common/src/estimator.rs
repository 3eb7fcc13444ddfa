//! Speed estimation from a window of distance readings.
//!
//! The pipeline, step by step:
//!
//! 1. Centered difference at every interior sample:
//!    `|x[i+2] - x[i]| / (2 * T)` in cm/s, giving `N - 2` samples
//! 2. Plain average of those samples
//! 3. cm/s to mph, then mph to prototype mph (HO scale)
//! 4. Truncate toward zero
//!
//! There is no outlier rejection. A glitched sonar reading affects the two
//! difference samples that span it and flows straight into the average.

use crate::config::{READ_TIME_MS, cm_per_s_to_mph, sample_period_ms, sample_period_seconds, to_prototype_speed};
use crate::sampler::Readings;

/// Intermediate and final results of one estimation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedEstimate {
    /// Mean of the centered-difference samples, in cm/s.
    pub average_cm_s: f32,
    /// Prototype-equivalent speed in mph, before truncation.
    pub prototype_mph: f32,
    /// Truncated display value.
    pub display: u32,
}

impl SpeedEstimate {
    /// Run the full estimation chain on a window of readings.
    pub fn from_readings<const N: usize>(
        readings: &Readings<N>,
        sample_period_s: f32,
    ) -> Self {
        let average_cm_s = average_speed_cm_s(readings, sample_period_s);
        let prototype_mph = to_prototype_speed(cm_per_s_to_mph(average_cm_s));
        Self {
            average_cm_s,
            prototype_mph,
            // `as` truncates toward zero and saturates, NaN maps to 0
            display: prototype_mph as u32,
        }
    }
}

/// Centered-difference speed at each interior sample, in cm/s.
///
/// Yields `N - 2` non-negative values; direction of travel is discarded.
pub fn centered_differences<const N: usize>(
    readings: &Readings<N>,
    sample_period_s: f32,
) -> impl Iterator<Item = f32> + '_ {
    const { assert!(N >= 3, "a centered difference needs at least 3 samples") };
    let span_s = 2.0 * sample_period_s;
    readings.windows(3).map(move |w| {
        let delta_cm = (i32::from(w[2]) - i32::from(w[0])).unsigned_abs();
        delta_cm as f32 / span_s
    })
}

/// Average of the centered-difference samples, in cm/s.
pub fn average_speed_cm_s<const N: usize>(
    readings: &Readings<N>,
    sample_period_s: f32,
) -> f32 {
    let sum: f32 = centered_differences(readings, sample_period_s).sum();
    sum / (N - 2) as f32
}

/// Estimated prototype speed in display units (truncated mph) for a window
/// sampled over [`READ_TIME_MS`].
pub fn estimate_speed<const N: usize>(readings: &Readings<N>) -> u32 {
    let period_s = sample_period_seconds(sample_period_ms(READ_TIME_MS, N));
    estimate_speed_with_period(readings, period_s)
}

/// Estimated prototype speed in display units for an explicit sample period.
pub fn estimate_speed_with_period<const N: usize>(
    readings: &Readings<N>,
    sample_period_s: f32,
) -> u32 {
    SpeedEstimate::from_readings(readings, sample_period_s).display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CM_PER_S_TO_MPH, HO_SCALE_FACTOR, SAMPLE_PERIOD_MS, sample_period_seconds};

    const PERIOD_S: f32 = 0.3;

    fn linear(
        start: u16,
        step: i32,
    ) -> Readings<10> {
        core::array::from_fn(|i| (i32::from(start) + step * i as i32) as u16)
    }

    #[test]
    fn test_constant_readings_give_zero() {
        let readings = [120u16; 10];
        assert!(centered_differences(&readings, PERIOD_S).all(|s| s == 0.0));
        assert_eq!(centered_differences(&readings, PERIOD_S).count(), 8);
        assert_eq!(estimate_speed_with_period(&readings, PERIOD_S), 0);
    }

    #[test]
    fn test_linear_motion_interior_speed() {
        for step in [1, 3, 7, 12] {
            let readings = linear(10, step);
            let expected = step as f32 / PERIOD_S;
            for speed in centered_differences(&readings, PERIOD_S) {
                assert!((speed - expected).abs() < 1e-3, "step {step}: {speed} != {expected}");
            }
        }
    }

    #[test]
    fn test_linear_motion_closed_form() {
        let step = 4;
        let readings = linear(0, step);
        let expected = (step as f32 / PERIOD_S) * CM_PER_S_TO_MPH * HO_SCALE_FACTOR;
        let estimate = SpeedEstimate::from_readings(&readings, PERIOD_S);
        assert!((estimate.prototype_mph - expected).abs() < 1e-3);
        assert_eq!(estimate.display, expected as u32);
    }

    #[test]
    fn test_direction_is_ignored() {
        let approaching = linear(200, -5);
        let receding = linear(155, 5);
        assert_eq!(estimate_speed_with_period(&approaching, PERIOD_S), estimate_speed_with_period(&receding, PERIOD_S));
    }

    #[test]
    fn test_reference_window() {
        // 5 cm per 300 ms sample: 10 cm / 0.6 s = 16.67 cm/s
        let readings: Readings<10> = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45];
        let period = sample_period_seconds(SAMPLE_PERIOD_MS);
        let estimate = SpeedEstimate::from_readings(&readings, period);

        assert!((estimate.average_cm_s - 16.6667).abs() < 1e-3);
        // 16.667 * 0.02237 * 87 = 32.44
        assert!((estimate.prototype_mph - 32.4365).abs() < 1e-2);
        assert_eq!(estimate.display, 32);
    }

    #[test]
    fn test_estimate_derives_period_from_read_time() {
        // 10 samples over 3000 ms: 300 ms period
        let readings: Readings<10> = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45];
        assert_eq!(estimate_speed(&readings), 32);

        // 3 samples over 3000 ms: 1000 ms period, 60 cm / 2 s = 30 cm/s
        let short: Readings<3> = [0, 30, 60];
        assert_eq!(estimate_speed(&short), estimate_speed_with_period(&short, 1.0));
        assert_eq!(estimate_speed(&short), 58);
    }

    #[test]
    fn test_single_glitch_propagates() {
        let mut readings = [100u16; 10];
        readings[4] = 130;
        // Samples 2 and 4 span the glitch: 30 cm / 0.6 s = 50 cm/s each
        let speeds: Vec<f32> = centered_differences(&readings, PERIOD_S).collect();
        assert_eq!(speeds.iter().filter(|&&s| s > 0.0).count(), 2);
        assert!((average_speed_cm_s(&readings, PERIOD_S) - 12.5).abs() < 1e-3);
    }

    #[test]
    fn test_minimum_window() {
        let readings: Readings<3> = [0, 0, 60];
        // 60 cm over 2 periods of 0.3 s
        assert!((average_speed_cm_s(&readings, PERIOD_S) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 3 cm per sample gives 10 cm/s -> 19.46 prototype mph
        let readings = linear(0, 3);
        assert_eq!(estimate_speed_with_period(&readings, PERIOD_S), 19);
    }
}
