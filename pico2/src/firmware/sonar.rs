//! Blocking HC-SR04 driver.
//!
//! The echo pulse is timed by busy-waiting on the echo pin against
//! `embassy_time::Instant` (1 µs tick). Nothing else runs on the executor, so
//! blocking here is equivalent to the sampler's own blocking delay.

use defmt::warn;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Instant, block_for};
use speedo_common::RangeSensor;

use super::echo::{ECHO_TIMEOUT_US, EchoError, TRIGGER_PULSE_US, echo_us_to_cm, reading_or_max};

pub struct HcSr04<'d> {
    trigger: Output<'d>,
    echo: Input<'d>,
}

impl<'d> HcSr04<'d> {
    pub fn new(
        trigger: Output<'d>,
        echo: Input<'d>,
    ) -> Self {
        Self { trigger, echo }
    }

    /// Trigger one ping and time its echo.
    pub fn measure(&mut self) -> Result<u16, EchoError> {
        let timeout = Duration::from_micros(ECHO_TIMEOUT_US);

        self.trigger.set_high();
        block_for(Duration::from_micros(u64::from(TRIGGER_PULSE_US)));
        self.trigger.set_low();

        let armed = Instant::now();
        while self.echo.is_low() {
            if armed.elapsed() > timeout {
                return Err(EchoError::NoEcho);
            }
        }

        let rise = Instant::now();
        while self.echo.is_high() {
            if rise.elapsed() > timeout {
                return Err(EchoError::EchoTooLong);
            }
        }

        Ok(echo_us_to_cm(rise.elapsed().as_micros()))
    }
}

impl RangeSensor for HcSr04<'_> {
    fn read_distance_cm(&mut self) -> u16 {
        let result = self.measure();
        if let Err(e) = result {
            warn!("Sonar read failed: {}", e);
        }
        reading_or_max(result)
    }
}
