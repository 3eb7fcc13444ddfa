//! Panel colors.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

pub const BLACK: Rgb565 = Rgb565::BLACK;
pub const WHITE: Rgb565 = Rgb565::WHITE;
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Lit LED segment.
pub const SEGMENT_ON: Rgb565 = Rgb565::RED;

/// Unlit LED segment, faintly visible like a real display.
pub const SEGMENT_OFF: Rgb565 = Rgb565::new(5, 2, 1);

/// Dimmed labels and dividers.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Event log text.
pub const ORANGE: Rgb565 = Rgb565::new(31, 40, 0);
