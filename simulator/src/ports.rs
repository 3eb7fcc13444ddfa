//! Persistence-of-vision model of the multiplexed display.
//!
//! Every segment write while a position is selected is tallied against that
//! position. Each pattern is held for the same pause, so the most frequent
//! pattern per position is what the eye would see.

use speedo_common::DisplayPorts;
use speedo_common::display::{CONTROL_MASK, CONTROL_OFF, DIGIT_COUNT, Position, SEGMENT_DATA_MASK, SEGMENTS_OFF};

/// Number of distinct driven data port patterns.
const PATTERN_SPACE: usize = SEGMENT_DATA_MASK as usize + 1;

/// Display ports that remember what each position showed.
pub struct PersistencePorts {
    segments: u8,
    control: u8,
    tally: [[u32; PATTERN_SPACE]; DIGIT_COUNT],
    writes: u32,
}

impl PersistencePorts {
    pub fn new() -> Self {
        Self {
            segments: SEGMENTS_OFF,
            control: CONTROL_OFF,
            tally: [[0; PATTERN_SPACE]; DIGIT_COUNT],
            writes: 0,
        }
    }

    /// Pattern seen at each position since the last reset, most significant first.
    pub fn frame(&self) -> [Option<u8>; DIGIT_COUNT] {
        core::array::from_fn(|index| {
            let counts = &self.tally[index];
            let (pattern, &count) = counts.iter().enumerate().max_by_key(|&(_, count)| *count)?;
            (count > 0).then_some(pattern as u8)
        })
    }

    /// Whether both ports are currently driven off.
    pub fn is_blank(&self) -> bool { self.segments == SEGMENTS_OFF && self.control == CONTROL_OFF }

    /// Total port writes since the last reset.
    pub fn writes(&self) -> u32 { self.writes }

    /// Forget everything seen so far.
    pub fn reset(&mut self) {
        self.tally = [[0; PATTERN_SPACE]; DIGIT_COUNT];
        self.writes = 0;
    }
}

impl Default for PersistencePorts {
    fn default() -> Self { Self::new() }
}

impl DisplayPorts for PersistencePorts {
    fn set_segments(
        &mut self,
        pattern: u8,
    ) {
        self.segments = pattern & SEGMENT_DATA_MASK;
        self.writes += 1;
        if let Some(position) = Position::from_control(self.control) {
            self.tally[position.frame_index()][usize::from(self.segments)] += 1;
        }
    }

    fn set_control(
        &mut self,
        pattern: u8,
    ) {
        self.control = pattern & CONTROL_MASK;
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use speedo_common::Multiplexer;
    use speedo_common::display::{SEGMENT_PATTERNS, decode_pattern};

    use super::*;
    use crate::timing::{VirtualClock, VirtualDelay};

    fn decoded(frame: [Option<u8>; DIGIT_COUNT]) -> [Option<u8>; DIGIT_COUNT] {
        frame.map(|pattern| pattern.and_then(decode_pattern))
    }

    #[test]
    fn test_new_ports_are_blank() {
        let ports = PersistencePorts::new();
        assert!(ports.is_blank());
        assert_eq!(ports.frame(), [None; DIGIT_COUNT]);
    }

    #[test]
    fn test_rendered_number_persists() {
        let mut display = Multiplexer::new(PersistencePorts::new());
        let mut delay = VirtualDelay::new(VirtualClock::new());

        display.render(47, &mut delay);

        let ports = display.ports();
        assert!(ports.is_blank());
        assert_eq!(decoded(ports.frame()), [Some(0), Some(4), Some(7)]);
    }

    #[test]
    fn test_blank_write_does_not_override_digit() {
        // Blank clears segments while the ones digit is still selected
        let mut display = Multiplexer::with_timing(PersistencePorts::new(), 3, 1);
        let mut delay = VirtualDelay::new(VirtualClock::new());

        display.render(123, &mut delay);

        assert_eq!(decoded(display.ports().frame()), [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_segments_without_position_not_tallied() {
        let mut ports = PersistencePorts::new();
        ports.set_segments(SEGMENT_PATTERNS[5]);
        assert_eq!(ports.frame(), [None; DIGIT_COUNT]);
        assert_eq!(ports.writes(), 1);
    }

    #[test]
    fn test_reset() {
        let mut ports = PersistencePorts::new();
        ports.set_control(Position::Tens.control_pattern());
        ports.set_segments(SEGMENT_PATTERNS[9]);
        assert_eq!(ports.frame()[1], Some(SEGMENT_PATTERNS[9] & SEGMENT_DATA_MASK));

        ports.reset();
        assert_eq!(ports.frame(), [None; DIGIT_COUNT]);
        assert_eq!(ports.writes(), 0);
    }
}
