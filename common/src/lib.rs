//! Core logic of the HO sonar speedometer.
//!
//! This crate contains the platform-agnostic pipeline shared between the
//! simulator and the Pico 2 firmware:
//!
//! - [`config`]: Sampling, display timing and unit constants
//! - [`sampler`]: Fixed-window distance acquisition behind [`RangeSensor`]
//! - [`estimator`]: Centered-difference speed estimation
//! - [`display`]: Digit decomposition, segment tables and multiplexing behind [`DisplayPorts`]
//! - [`speedometer`]: The control loop tying the three together
//! - [`synthetic`]: Synthetic train distance profile for demos and the simulator
//! - [`event_log`]: Small ring buffer of text lines
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Time is only ever consumed through
//! [`embedded_hal::delay::DelayNs`], so the same code runs on the RP2350 with
//! `embassy_time::Delay` and on the host with a virtual clock.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p speedo-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod display;
pub mod estimator;
pub mod event_log;
pub mod sampler;
pub mod speedometer;
pub mod synthetic;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use display::{DisplayPorts, Multiplexer, RenderReport};
pub use estimator::{SpeedEstimate, estimate_speed, estimate_speed_with_period};
pub use sampler::{RangeSensor, Readings, Sampler};
pub use speedometer::{CycleReport, Speedometer, should_display};
