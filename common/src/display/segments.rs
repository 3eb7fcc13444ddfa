//! Segment and position lookup tables.
//!
//! # Wiring
//!
//! The display is common-anode, so segment lines are active-low: a `0` bit
//! lights the segment. Bit `n` of the data port drives segment `a + n`:
//!
//! ```text
//!      aaa
//!     f   b
//!      ggg
//!     e   c
//!      ddd   (dp = bit 7, not driven)
//! ```
//!
//! The control port is one-hot and active-high: bit 0 selects position 1
//! (ones), bit 1 position 2 (tens), bit 2 position 3 (hundreds).

// =============================================================================
// Port Layout
// =============================================================================

/// Data port bits configured as outputs (segments a-g, decimal point unused).
pub const SEGMENT_DATA_MASK: u8 = 0x7F;

/// Control port bits configured as outputs (three position selects).
pub const CONTROL_MASK: u8 = 0x07;

/// Data port value written when the display is blanked.
pub const SEGMENTS_OFF: u8 = 0x00;

/// Control port value with no position selected.
pub const CONTROL_OFF: u8 = 0x00;

/// Number of physical digit positions.
pub const DIGIT_COUNT: usize = 3;

// =============================================================================
// Digit Patterns
// =============================================================================

/// Active-low segment patterns for digits 0-9.
pub const SEGMENT_PATTERNS: [u8; 10] = [
    0xC0, // 0: a b c d e f
    0xF9, // 1: b c
    0xA4, // 2: a b d e g
    0xB0, // 3: a b c d g
    0x99, // 4: b c f g
    0x92, // 5: a c d f g
    0x82, // 6: a c d e f g
    0xF8, // 7: a b c
    0x80, // 8: all
    0x98, // 9: a b c f g
];

/// Individual segments, numbered by their data port bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Segment {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

impl Segment {
    /// All seven segments in bit order.
    pub const ALL: [Self; 7] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G];

    /// Data port bit for this segment.
    #[inline]
    pub const fn mask(self) -> u8 { 1 << self as u8 }
}

/// Segment pattern for a single decimal digit, `None` above 9.
#[inline]
pub const fn segment_pattern(digit: u8) -> Option<u8> {
    if digit < 10 {
        Some(SEGMENT_PATTERNS[digit as usize])
    } else {
        None
    }
}

/// Whether `segment` is lit in an active-low `pattern`.
#[inline]
pub const fn is_lit(
    pattern: u8,
    segment: Segment,
) -> bool {
    pattern & segment.mask() == 0
}

/// Digit shown by a data port pattern, if it is one of the digit patterns.
///
/// Only the driven bits are compared.
pub fn decode_pattern(pattern: u8) -> Option<u8> {
    SEGMENT_PATTERNS
        .iter()
        .position(|&p| p & SEGMENT_DATA_MASK == pattern & SEGMENT_DATA_MASK)
        .map(|digit| digit as u8)
}

// =============================================================================
// Positions
// =============================================================================

/// Physical digit position, numbered from the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Position {
    /// Rightmost digit.
    Ones = 1,
    Tens = 2,
    /// Leftmost digit.
    Hundreds = 3,
}

impl Position {
    /// Order in which one refresh cycle visits the positions.
    pub const REFRESH_ORDER: [Self; DIGIT_COUNT] = [Self::Hundreds, Self::Tens, Self::Ones];

    /// One-hot control port pattern selecting this position.
    #[inline]
    pub const fn control_pattern(self) -> u8 { 1 << (self as u8 - 1) }

    /// Index into a most-significant-first digit frame.
    #[inline]
    pub const fn frame_index(self) -> usize { DIGIT_COUNT - self as usize }

    /// Position selected by a control port pattern, if exactly one is selected.
    pub const fn from_control(pattern: u8) -> Option<Self> {
        match pattern & CONTROL_MASK {
            0x01 => Some(Self::Ones),
            0x02 => Some(Self::Tens),
            0x04 => Some(Self::Hundreds),
            _ => None,
        }
    }
}
