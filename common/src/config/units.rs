//! Unit conversion constants.
//!
//! The estimator works in cm/s (sonar readings are centimeters). The displayed
//! value is the prototype-equivalent speed in MPH: model speed converted to MPH,
//! then multiplied by the model scale.

/// Milliseconds per second.
pub const MS_PER_SECOND: f32 = 1000.0;

/// Conversion factor from cm/s to miles per hour.
/// 1 cm/s = 0.01 m/s = 0.022369 mph.
pub const CM_PER_S_TO_MPH: f32 = 0.02237;

/// HO scale is 1:87, a model moving at 1 mph looks like a prototype at 87 mph.
pub const HO_SCALE_FACTOR: f32 = 87.0;

/// Convert a speed in cm/s to miles per hour.
#[inline]
pub const fn cm_per_s_to_mph(cm_per_s: f32) -> f32 { cm_per_s * CM_PER_S_TO_MPH }

/// Scale a model speed in mph up to the equivalent prototype speed.
#[inline]
pub const fn to_prototype_speed(model_mph: f32) -> f32 { model_mph * HO_SCALE_FACTOR }
