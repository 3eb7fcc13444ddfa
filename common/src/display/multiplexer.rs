//! Time-division multiplexing of the three digit positions.
//!
//! Only one position is electrically active at a time. Each refresh cycle
//! lights hundreds, tens and ones in turn, holding each for the segment pause.
//! At 500 µs per position the whole display refreshes at ~667 Hz, well above
//! flicker fusion, so all three digits appear lit together.

use embedded_hal::delay::DelayNs;

use super::digits::{Digits, MAX_DISPLAY_VALUE};
use super::segments::{CONTROL_OFF, Position, SEGMENTS_OFF, segment_pattern};
use crate::config::{DISPLAY_TIME, SEGMENT_PAUSE_US};

/// Raw output ports of the display.
///
/// Implementations write the pattern to the physical lines immediately.
pub trait DisplayPorts {
    /// Drive the segment data lines (active-low, bit 0 = segment a).
    fn set_segments(
        &mut self,
        pattern: u8,
    );

    /// Drive the position select lines (one-hot, bit 0 = ones).
    fn set_control(
        &mut self,
        pattern: u8,
    );
}

impl<T: DisplayPorts + ?Sized> DisplayPorts for &mut T {
    #[inline]
    fn set_segments(
        &mut self,
        pattern: u8,
    ) {
        T::set_segments(self, pattern);
    }

    #[inline]
    fn set_control(
        &mut self,
        pattern: u8,
    ) {
        T::set_control(self, pattern);
    }
}

/// Outcome of one `render` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderReport {
    /// Value actually shown.
    pub shown: u32,
    /// The requested value did not fit and was clamped to 999.
    pub saturated: bool,
    /// Refresh cycles performed.
    pub refresh_cycles: u32,
}

/// Drives the display ports for a fixed number of refresh cycles per reading.
pub struct Multiplexer<P> {
    ports: P,
    refresh_cycles: u32,
    segment_pause_us: u32,
}

impl<P: DisplayPorts> Multiplexer<P> {
    /// Multiplexer with the default display time and segment pause.
    pub const fn new(ports: P) -> Self { Self::with_timing(ports, DISPLAY_TIME, SEGMENT_PAUSE_US) }

    /// Multiplexer with explicit timing.
    pub const fn with_timing(
        ports: P,
        refresh_cycles: u32,
        segment_pause_us: u32,
    ) -> Self {
        Self {
            ports,
            refresh_cycles,
            segment_pause_us,
        }
    }

    /// Show `number` for the configured display time, then blank.
    ///
    /// Values above 999 are clamped to 999 and reported as saturated.
    pub fn render<D: DelayNs>(
        &mut self,
        number: u32,
        delay: &mut D,
    ) -> RenderReport {
        let saturated = number > MAX_DISPLAY_VALUE;
        let digits = Digits::saturating_from(number);
        let frame = digits.frame();

        for _ in 0..self.refresh_cycles {
            for position in Position::REFRESH_ORDER {
                self.show_digit(position, frame.digit_at(position));
                delay.delay_us(self.segment_pause_us);
            }
        }
        self.blank();

        RenderReport {
            shown: digits.value(),
            saturated,
            refresh_cycles: self.refresh_cycles,
        }
    }

    /// Select `position` and drive the segments for `digit`.
    ///
    /// Only called with digits from a `DigitFrame`, which are always 0-9.
    fn show_digit(
        &mut self,
        position: Position,
        digit: u8,
    ) {
        self.ports.set_control(position.control_pattern());
        if let Some(pattern) = segment_pattern(digit) {
            self.ports.set_segments(pattern);
        }
    }

    /// Turn every position off.
    pub fn blank(&mut self) {
        self.ports.set_segments(SEGMENTS_OFF);
        self.ports.set_control(CONTROL_OFF);
    }

    /// Borrow the output ports.
    #[inline]
    pub const fn ports(&self) -> &P { &self.ports }

    /// Mutably borrow the output ports.
    #[inline]
    pub fn ports_mut(&mut self) -> &mut P { &mut self.ports }
}
