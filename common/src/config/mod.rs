//! Compile-time configuration of the speedometer.
//!
//! - `timing`: Sample window, sample period and display multiplexing timing
//! - `units`: Unit conversion and model-scale constants

pub mod timing;
pub mod units;

// Re-export timing constants at config level for convenience
pub use timing::{
    DISPLAY_TIME,
    MINIMUM_DISPLAY_SPEED,
    POSITION_SAMPLES,
    READ_TIME_MS,
    SAMPLE_PERIOD_MS,
    SEGMENT_PAUSE_US,
    SPEED_SAMPLES,
    sample_period_ms,
    sample_period_seconds,
};
// Re-export unit conversions at config level for convenience
pub use units::{CM_PER_S_TO_MPH, HO_SCALE_FACTOR, MS_PER_SECOND, cm_per_s_to_mph, to_prototype_speed};
