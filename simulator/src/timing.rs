//! Virtual time for the simulator.
//!
//! The pipeline blocks for several seconds per cycle. The simulator runs it
//! against a shared virtual clock instead of sleeping: every delay advances the
//! clock, and the simulated sonar reads the train position at the clock's
//! current time.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

/// Length of a simulated session, in seconds (one round of demo passes).
pub const SIMULATED_DURATION_S: f32 = 72.0;

/// Directory the rendered frames are written to.
pub const OUTPUT_DIR: &str = "sim-output";

const NS_PER_US: u64 = 1_000;
const NS_PER_MS: u64 = 1_000_000;
const NS_PER_S: f64 = 1_000_000_000.0;

/// Shared simulated time, in nanoseconds since start.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now_ns: Rc<Cell<u64>>,
}

impl VirtualClock {
    pub fn new() -> Self { Self::default() }

    #[inline]
    pub fn now_ns(&self) -> u64 { self.now_ns.get() }

    /// Current time in seconds.
    pub fn now_s(&self) -> f32 { (self.now_ns.get() as f64 / NS_PER_S) as f32 }

    pub fn advance_ns(
        &self,
        ns: u64,
    ) {
        self.now_ns.set(self.now_ns.get().saturating_add(ns));
    }
}

/// `DelayNs` that advances a [`VirtualClock`] instead of waiting.
#[derive(Clone, Debug)]
pub struct VirtualDelay {
    clock: VirtualClock,
}

impl VirtualDelay {
    pub fn new(clock: VirtualClock) -> Self { Self { clock } }
}

impl DelayNs for VirtualDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.clock.advance_ns(u64::from(ns));
    }

    fn delay_us(
        &mut self,
        us: u32,
    ) {
        self.clock.advance_ns(u64::from(us) * NS_PER_US);
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.clock.advance_ns(u64::from(ms) * NS_PER_MS);
    }
}
