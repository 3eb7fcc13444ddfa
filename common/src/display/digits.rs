//! Decimal digit decomposition.
//!
//! Values are split into at most [`MAX_DIGITS`] digits held in a fixed-capacity
//! buffer. Anything above [`MAX_DISPLAY_VALUE`] saturates to 999 when rendered.

use heapless::Vec;

use super::segments::{DIGIT_COUNT, Position};

/// Digit capacity of the display.
pub const MAX_DIGITS: usize = DIGIT_COUNT;

/// Largest value the display can show.
pub const MAX_DISPLAY_VALUE: u32 = 999;

/// Number of decimal digits in `value`; zero has one digit.
pub const fn digit_count(mut value: u32) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

/// Decimal digits of a displayable value, most significant first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digits {
    digits: Vec<u8, MAX_DIGITS>,
}

impl Digits {
    /// Decompose `value`, or `None` if it needs more than three digits.
    pub fn try_from_value(mut value: u32) -> Option<Self> {
        let count = digit_count(value);
        if count > MAX_DIGITS {
            return None;
        }

        // Least significant digit first, written back to front
        let mut buf = [0u8; MAX_DIGITS];
        let mut idx = count;
        while idx > 0 {
            idx -= 1;
            buf[idx] = (value % 10) as u8;
            value /= 10;
        }

        let mut digits = Vec::new();
        for &digit in &buf[..count] {
            digits.push(digit).ok();
        }
        Some(Self { digits })
    }

    /// Decompose `value`, clamping it to [`MAX_DISPLAY_VALUE`] first.
    pub fn saturating_from(value: u32) -> Self {
        Self::try_from_value(value.min(MAX_DISPLAY_VALUE)).unwrap_or_default()
    }

    /// The digits, most significant first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] { &self.digits }

    /// Number of digits (1 to 3).
    #[inline]
    pub fn len(&self) -> usize { self.digits.len() }

    /// Always false: every value has at least one digit.
    #[inline]
    pub fn is_empty(&self) -> bool { self.digits.is_empty() }

    /// Reassemble the value from its digits.
    pub fn value(&self) -> u32 {
        self.digits
            .iter()
            .fold(0, |acc, &digit| acc * 10 + u32::from(digit))
    }

    /// Per-position digits with leading positions padded with zero.
    pub fn frame(&self) -> DigitFrame {
        let mut frame = [0u8; DIGIT_COUNT];
        let offset = DIGIT_COUNT - self.digits.len();
        frame[offset..].copy_from_slice(&self.digits);
        DigitFrame(frame)
    }
}

impl Default for Digits {
    /// The single digit `0`.
    fn default() -> Self {
        let mut digits = Vec::new();
        digits.push(0).ok();
        Self { digits }
    }
}

/// What each display position shows, hundreds first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitFrame(pub [u8; DIGIT_COUNT]);

impl DigitFrame {
    /// Digit shown at `position`.
    #[inline]
    pub const fn digit_at(
        &self,
        position: Position,
    ) -> u8 {
        self.0[position.frame_index()]
    }
}
