//! Test doubles for the hardware seams.
//!
//! All doubles share one [`Trace`] so tests can assert the exact interleaving
//! of sensor reads, port writes and delays.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::display::DisplayPorts;
use crate::sampler::RangeSensor;

/// One observable interaction with the hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Read(u16),
    Segments(u8),
    Control(u8),
    DelayMs(u32),
    DelayUs(u32),
    DelayNs(u32),
}

/// Shared, append-only event log.
#[derive(Clone, Default)]
pub struct Trace {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Trace {
    pub fn new() -> Self { Self::default() }

    pub fn push(
        &self,
        event: Event,
    ) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> { self.events.borrow().clone() }

    pub fn clear(&self) { self.events.borrow_mut().clear(); }

    pub fn delay(&self) -> RecordingDelay { RecordingDelay { trace: self.clone() } }

    pub fn ports(&self) -> RecordingPorts { RecordingPorts { trace: self.clone() } }

    /// Total time spent in delays, in microseconds.
    pub fn elapsed_us(&self) -> u64 {
        self.events
            .borrow()
            .iter()
            .map(|event| match *event {
                Event::DelayMs(ms) => u64::from(ms) * 1000,
                Event::DelayUs(us) => u64::from(us),
                Event::DelayNs(ns) => u64::from(ns) / 1000,
                _ => 0,
            })
            .sum()
    }

    /// Port writes only (segments and control), in order.
    pub fn port_writes(&self) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .copied()
            .filter(|event| matches!(event, Event::Segments(_) | Event::Control(_)))
            .collect()
    }
}

/// Sensor replaying a fixed script, then repeating its last value.
pub struct ScriptedSensor {
    script: Vec<u16>,
    next: usize,
    trace: Trace,
}

impl ScriptedSensor {
    pub fn new(
        script: &[u16],
        trace: Trace,
    ) -> Self {
        Self {
            script: script.to_vec(),
            next: 0,
            trace,
        }
    }
}

impl RangeSensor for ScriptedSensor {
    fn read_distance_cm(&mut self) -> u16 {
        let value = self
            .script
            .get(self.next)
            .or(self.script.last())
            .copied()
            .unwrap_or(0);
        self.next += 1;
        self.trace.push(Event::Read(value));
        value
    }
}

/// Delay that records instead of sleeping.
pub struct RecordingDelay {
    trace: Trace,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.trace.push(Event::DelayNs(ns));
    }

    fn delay_us(
        &mut self,
        us: u32,
    ) {
        self.trace.push(Event::DelayUs(us));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.trace.push(Event::DelayMs(ms));
    }
}

/// Display ports that record every write.
pub struct RecordingPorts {
    trace: Trace,
}

impl DisplayPorts for RecordingPorts {
    fn set_segments(
        &mut self,
        pattern: u8,
    ) {
        self.trace.push(Event::Segments(pattern));
    }

    fn set_control(
        &mut self,
        pattern: u8,
    ) {
        self.trace.push(Event::Control(pattern));
    }
}
