//! Display ports emulated with individual GPIO outputs.

use embassy_rp::gpio::{Level, Output};
use speedo_common::DisplayPorts;

use super::pins::{CONTROL_PINS, SEGMENT_PINS, bit_levels};

/// Segment data and position select lines of the seven-segment display.
pub struct GpioPorts<'d> {
    segments: [Output<'d>; SEGMENT_PINS],
    control: [Output<'d>; CONTROL_PINS],
}

impl<'d> GpioPorts<'d> {
    pub fn new(
        segments: [Output<'d>; SEGMENT_PINS],
        control: [Output<'d>; CONTROL_PINS],
    ) -> Self {
        Self { segments, control }
    }
}

impl DisplayPorts for GpioPorts<'_> {
    fn set_segments(
        &mut self,
        pattern: u8,
    ) {
        drive(&mut self.segments, pattern);
    }

    fn set_control(
        &mut self,
        pattern: u8,
    ) {
        drive(&mut self.control, pattern);
    }
}

fn drive<const N: usize>(
    pins: &mut [Output<'_>; N],
    pattern: u8,
) {
    for (pin, high) in pins.iter_mut().zip(bit_levels::<N>(pattern)) {
        pin.set_level(Level::from(high));
    }
}
