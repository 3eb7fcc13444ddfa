//! GPIO assignment for the speedometer board.
//!
//! Pin mapping:
//! - Segments a-g (data port bits 0-6): GPIO0-GPIO6, through 330 Ω resistors
//! - Position select 1/2/3 (control port bits 0-2): GPIO7-GPIO9, driving the
//!   digit anode transistors
//! - HC-SR04 TRIG: GPIO14
//! - HC-SR04 ECHO: GPIO15 (through a 5 V to 3.3 V divider)
//!
//! The two ports are emulated as groups of individual GPIO outputs. Bit `n`
//! of a port pattern drives the `n`-th pin of its group.

use speedo_common::display::{CONTROL_MASK, DIGIT_COUNT, SEGMENT_DATA_MASK};

/// Number of segment data lines (decimal point not wired).
pub const SEGMENT_PINS: usize = 7;

/// Number of position select lines.
pub const CONTROL_PINS: usize = DIGIT_COUNT;

const _: () = assert!(SEGMENT_DATA_MASK == (1 << SEGMENT_PINS) - 1);
const _: () = assert!(CONTROL_MASK == (1 << CONTROL_PINS) - 1);

/// Output level of each pin in a group for a port pattern (`true` = high).
#[inline]
pub fn bit_levels<const N: usize>(pattern: u8) -> [bool; N] {
    core::array::from_fn(|bit| pattern & (1 << bit) != 0)
}
