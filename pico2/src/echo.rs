//! HC-SR04 echo timing.
//!
//! The sensor is triggered with a 10 µs pulse and answers with an echo pulse
//! whose width is the sound's round-trip time. At ~343 m/s the round trip
//! takes 58 µs per centimeter of distance.
//!
//! A missing or overlong echo is reported as [`MAX_RANGE_CM`]. The estimator
//! sees that like any other reading, which matches how the loop treats all
//! sensor values: trusted, unfiltered.

/// Width of the trigger pulse, in microseconds.
pub const TRIGGER_PULSE_US: u32 = 10;

/// Echo round-trip time per centimeter, in microseconds.
pub const ECHO_US_PER_CM: u64 = 58;

/// Rated maximum range of the HC-SR04, in centimeters.
pub const MAX_RANGE_CM: u16 = 400;

/// Longest wait for the echo line to rise, and for it to fall again, in microseconds.
/// Comfortably above the round trip at maximum range (400 * 58 = 23.2 ms).
pub const ECHO_TIMEOUT_US: u64 = 30_000;

const _: () = assert!(MAX_RANGE_CM as u64 * ECHO_US_PER_CM < ECHO_TIMEOUT_US);

/// Why a measurement produced no distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum EchoError {
    /// Echo line never went high after the trigger.
    NoEcho,
    /// Echo line stayed high past the timeout.
    EchoTooLong,
}

/// Convert an echo pulse width to a distance, clamped to the rated range.
#[inline]
pub const fn echo_us_to_cm(echo_us: u64) -> u16 {
    let cm = echo_us / ECHO_US_PER_CM;
    if cm > MAX_RANGE_CM as u64 {
        MAX_RANGE_CM
    } else {
        cm as u16
    }
}

/// Distance reported to the pipeline for a measurement result.
#[inline]
pub const fn reading_or_max(result: Result<u16, EchoError>) -> u16 {
    match result {
        Ok(cm) => cm,
        Err(_) => MAX_RANGE_CM,
    }
}
