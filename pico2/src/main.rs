//! HO Sonar Speedometer Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Measures the speed of an approaching model train with an HC-SR04 and shows
//! the prototype speed in mph on a 3-digit common-anode seven-segment display.
//!
//! # Loop
//!
//! - Sample: 10 distance readings spread over 3 seconds
//! - Estimate: centered differences, averaged, scaled to prototype mph
//! - Display: speeds above 10 mph are multiplexed for ~1.5 seconds, then blanked
//!
//! # Features
//!
//! - `demo-sensor`: replace the HC-SR04 with a synthetic train (no sensor wired)
//!
//! The firmware modules are only compiled for ARM targets. Host builds get an
//! empty `main`.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

#[cfg(target_arch = "arm")]
mod firmware;

#[cfg(not(target_arch = "arm"))]
fn main() {}
