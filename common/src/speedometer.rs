//! The control loop: sample, estimate, gate, display.
//!
//! [`Speedometer`] owns every hardware resource the loop touches, so one
//! value carries the whole pipeline and nothing is global.

use embedded_hal::delay::DelayNs;

use crate::config::{MINIMUM_DISPLAY_SPEED, POSITION_SAMPLES, READ_TIME_MS, sample_period_seconds};
use crate::display::{DisplayPorts, Multiplexer, RenderReport};
use crate::estimator::SpeedEstimate;
use crate::sampler::{RangeSensor, Readings, Sampler};

/// Whether an estimate clears the noise gate and should be displayed.
#[inline]
pub const fn should_display(speed: u32) -> bool { speed > MINIMUM_DISPLAY_SPEED }

/// Result of one pass through the loop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Speed estimate for this window.
    pub estimate: SpeedEstimate,
    /// Set when the estimate cleared the gate and was displayed.
    pub render: Option<RenderReport>,
}

impl CycleReport {
    /// Speed in display units.
    #[inline]
    pub const fn speed(&self) -> u32 { self.estimate.display }

    /// Whether the display was driven this cycle.
    #[inline]
    pub const fn displayed(&self) -> bool { self.render.is_some() }
}

/// Sonar speedometer pipeline with its sensor, display and delay provider.
pub struct Speedometer<S, P, D, const N: usize = POSITION_SAMPLES> {
    sampler: Sampler<S, N>,
    display: Multiplexer<P>,
    delay: D,
    readings: Readings<N>,
}

impl<S, P, D, const N: usize> Speedometer<S, P, D, N>
where
    S: RangeSensor,
    P: DisplayPorts,
    D: DelayNs,
{
    /// Build the pipeline with the default read time and blank the display.
    pub fn new(
        sensor: S,
        ports: P,
        delay: D,
    ) -> Self {
        Self::from_parts(Sampler::new(sensor, READ_TIME_MS), Multiplexer::new(ports), delay)
    }

    /// Build the pipeline from preconfigured parts and blank the display.
    pub fn from_parts(
        sampler: Sampler<S, N>,
        mut display: Multiplexer<P>,
        delay: D,
    ) -> Self {
        display.blank();
        Self {
            sampler,
            display,
            delay,
            readings: [0; N],
        }
    }

    /// Run one sample-estimate-display pass.
    pub fn run_cycle(&mut self) -> CycleReport {
        self.readings = self.sampler.acquire_readings(&mut self.delay);

        let period_s = sample_period_seconds(self.sampler.period_ms());
        let estimate = SpeedEstimate::from_readings(&self.readings, period_s);

        let render = should_display(estimate.display).then(|| self.display.render(estimate.display, &mut self.delay));

        CycleReport { estimate, render }
    }

    /// Run the loop forever, handing each cycle's report and readings to `on_cycle`.
    pub fn run<F>(
        &mut self,
        mut on_cycle: F,
    ) -> !
    where
        F: FnMut(&CycleReport, &Readings<N>),
    {
        loop {
            let report = self.run_cycle();
            on_cycle(&report, &self.readings);
        }
    }

    /// Readings from the most recent cycle.
    #[inline]
    pub const fn last_readings(&self) -> &Readings<N> { &self.readings }

    /// Borrow the sampler (and through it, the sensor).
    #[inline]
    pub const fn sampler(&self) -> &Sampler<S, N> { &self.sampler }

    /// Borrow the display multiplexer.
    #[inline]
    pub const fn display(&self) -> &Multiplexer<P> { &self.display }

    /// Mutably borrow the display multiplexer.
    #[inline]
    pub fn display_mut(&mut self) -> &mut Multiplexer<P> { &mut self.display }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::SEGMENT_PATTERNS;
    use crate::testing::{Event, RecordingDelay, RecordingPorts, ScriptedSensor, Trace};

    type TestSpeedometer = Speedometer<ScriptedSensor, RecordingPorts, RecordingDelay>;

    fn speedometer(script: &[u16]) -> (TestSpeedometer, Trace) {
        let trace = Trace::new();
        let speedo = Speedometer::new(ScriptedSensor::new(script, trace.clone()), trace.ports(), trace.delay());
        trace.clear();
        (speedo, trace)
    }

    #[test]
    fn test_threshold_gate() {
        assert!(!should_display(0));
        assert!(!should_display(MINIMUM_DISPLAY_SPEED));
        assert!(should_display(MINIMUM_DISPLAY_SPEED + 1));
    }

    #[test]
    fn test_new_blanks_display() {
        let trace = Trace::new();
        let _speedo: TestSpeedometer = Speedometer::new(ScriptedSensor::new(&[0], trace.clone()), trace.ports(), trace.delay());
        assert_eq!(trace.events(), vec![Event::Segments(0x00), Event::Control(0x00)]);
    }

    #[test]
    fn test_reference_window_is_displayed() {
        let (mut speedo, trace) = speedometer(&[0, 5, 10, 15, 20, 25, 30, 35, 40, 45]);

        let report = speedo.run_cycle();
        assert_eq!(report.speed(), 32);
        assert!(report.displayed());
        assert_eq!(report.render.map(|r| r.shown), Some(32));
        assert_eq!(speedo.last_readings(), &[0, 5, 10, 15, 20, 25, 30, 35, 40, 45]);

        // Ten reads with their sleeps come first, then the display refresh
        let events = trace.events();
        assert_eq!(events[0], Event::Read(0));
        assert_eq!(events[1], Event::DelayMs(300));
        assert_eq!(events[20], Event::Control(0x04));
        assert_eq!(events[21], Event::Segments(SEGMENT_PATTERNS[0]));
        assert_eq!(events[24], Event::Segments(SEGMENT_PATTERNS[3]));
        assert_eq!(events[27], Event::Segments(SEGMENT_PATTERNS[2]));
    }

    #[test]
    fn test_stationary_train_never_touches_display() {
        let (mut speedo, trace) = speedometer(&[80; 10]);

        let report = speedo.run_cycle();
        assert_eq!(report.speed(), 0);
        assert!(!report.displayed());
        assert!(trace.port_writes().is_empty());
        assert_eq!(trace.elapsed_us(), 3_000_000);
    }

    #[test]
    fn test_estimate_at_threshold_is_suppressed() {
        // 3 cm per sample is ~19 mph, 1 cm per sample is ~6 mph
        let readings: Vec<u16> = (0..10).map(|i| 100 + i).collect();
        let (mut speedo, trace) = speedometer(&readings);

        let report = speedo.run_cycle();
        assert!(report.speed() <= MINIMUM_DISPLAY_SPEED);
        assert!(report.render.is_none());
        assert!(trace.port_writes().is_empty());
    }

    #[test]
    fn test_fast_train_saturates() {
        // 300 cm per sample: 1000 cm/s, ~1946 prototype mph
        let readings: Vec<u16> = (0..10).map(|i| i * 300).collect();
        let (mut speedo, _trace) = speedometer(&readings);

        let report = speedo.run_cycle();
        assert!(report.speed() > 999);
        let render = report.render.unwrap();
        assert!(render.saturated);
        assert_eq!(render.shown, 999);
    }

    #[test]
    fn test_consecutive_cycles_use_fresh_windows() {
        let mut script = vec![50u16; 10];
        script.extend((0..10).map(|i| 50 + i * 5));
        let (mut speedo, _trace) = speedometer(&script);

        assert!(!speedo.run_cycle().displayed());
        assert_eq!(speedo.run_cycle().speed(), 32);
    }

    #[test]
    fn test_run_reports_every_cycle() {
        use std::cell::RefCell;
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let mut script = vec![50u16; 10];
        script.extend((0..10).map(|i| 50 + i * 5));
        let (mut speedo, _trace) = speedometer(&script);

        let seen = RefCell::new(Vec::new());
        let stopped = catch_unwind(AssertUnwindSafe(|| {
            speedo.run(|report, readings| {
                seen.borrow_mut().push((report.speed(), report.displayed(), readings[9]));
                if seen.borrow().len() == 2 {
                    panic!("stop after two cycles");
                }
            });
        }));

        assert!(stopped.is_err());
        assert_eq!(seen.into_inner(), vec![(0, false, 50), (32, true, 95)]);
    }
}
