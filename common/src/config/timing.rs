//! Sampling and display timing constants.
//!
//! All timing is fixed at compile time. The sampler spends `READ_TIME_MS` per
//! cycle collecting `POSITION_SAMPLES` readings, and a displayed reading keeps
//! the multiplexer busy for `DISPLAY_TIME * 3 * SEGMENT_PAUSE_US` microseconds
//! (1.5 s with the values below).
//!
//! # Compile-Time Validation
//!
//! The centered difference needs a sample on each side of the point it
//! estimates, so fewer than 3 samples fails compilation.

// =============================================================================
// Sampling Window
// =============================================================================

/// Number of distance samples taken from the sonar per cycle.
pub const POSITION_SAMPLES: usize = 10;

/// Number of centered-difference speed samples derived from one window.
pub const SPEED_SAMPLES: usize = POSITION_SAMPLES - 2;

/// Total time spent pulling data from the sensor per cycle, in milliseconds.
/// `READ_TIME_MS / POSITION_SAMPLES` is the sample period.
pub const READ_TIME_MS: u32 = 3000;

/// Sample period in whole milliseconds (300 ms for the defaults).
pub const SAMPLE_PERIOD_MS: u32 = sample_period_ms(READ_TIME_MS, POSITION_SAMPLES);

const _: () = assert!(POSITION_SAMPLES >= 3);
const _: () = assert!(SAMPLE_PERIOD_MS > 0);

// =============================================================================
// Display Multiplexing
// =============================================================================

/// Number of refresh cycles a reading stays on the display.
/// Each cycle lights all three positions once.
pub const DISPLAY_TIME: u32 = 1000;

/// Time each digit position stays lit before switching, in microseconds.
pub const SEGMENT_PAUSE_US: u32 = 500;

/// Estimates at or below this value are treated as noise and never displayed.
pub const MINIMUM_DISPLAY_SPEED: u32 = 10;

const _: () = assert!(DISPLAY_TIME > 0);

// =============================================================================
// Helpers
// =============================================================================

/// Per-sample sleep for a window of `samples` readings spread over `read_time_ms`.
///
/// Integer division: the sampler sleeps whole milliseconds.
pub const fn sample_period_ms(
    read_time_ms: u32,
    samples: usize,
) -> u32 {
    read_time_ms / samples as u32
}

/// Sample period in seconds, as used by the centered difference.
pub const fn sample_period_seconds(period_ms: u32) -> f32 { period_ms as f32 / super::units::MS_PER_SECOND }
