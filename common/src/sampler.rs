//! Distance sampling.
//!
//! Collects a fixed window of sonar readings at a fixed sample period. The
//! sensor is trusted: whatever it returns goes into the window unchanged.

use embedded_hal::delay::DelayNs;

use crate::config::sample_period_ms;

/// One window of distance readings in centimeters, oldest first.
pub type Readings<const N: usize> = [u16; N];

/// Blocking range sensor returning the current distance in centimeters.
pub trait RangeSensor {
    /// Read the current distance. Blocks until the measurement completes.
    fn read_distance_cm(&mut self) -> u16;
}

impl<T: RangeSensor + ?Sized> RangeSensor for &mut T {
    #[inline]
    fn read_distance_cm(&mut self) -> u16 { T::read_distance_cm(self) }
}

/// Acquires windows of `N` readings spread over a fixed read time.
pub struct Sampler<S, const N: usize> {
    sensor: S,
    period_ms: u32,
}

impl<S: RangeSensor, const N: usize> Sampler<S, N> {
    /// Create a sampler spreading `N` readings over `read_time_ms`.
    pub const fn new(
        sensor: S,
        read_time_ms: u32,
    ) -> Self {
        const { assert!(N >= 3, "a centered difference needs at least 3 samples") };
        Self {
            sensor,
            period_ms: sample_period_ms(read_time_ms, N),
        }
    }

    /// Sleep between consecutive readings, in milliseconds.
    #[inline]
    pub const fn period_ms(&self) -> u32 { self.period_ms }

    /// Take `N` readings, sleeping one sample period after each.
    ///
    /// Costs roughly `N * period_ms` of wall-clock time plus sensor latency.
    pub fn acquire_readings<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Readings<N> {
        let mut readings = [0u16; N];
        for slot in &mut readings {
            *slot = self.sensor.read_distance_cm();
            delay.delay_ms(self.period_ms);
        }
        readings
    }

    /// Borrow the underlying sensor.
    #[inline]
    pub const fn sensor(&self) -> &S { &self.sensor }

    /// Mutably borrow the underlying sensor.
    #[inline]
    pub fn sensor_mut(&mut self) -> &mut S { &mut self.sensor }
}
