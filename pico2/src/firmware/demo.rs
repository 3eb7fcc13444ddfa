//! Synthetic sensor for running the board without an HC-SR04.

use embassy_time::Instant;
use speedo_common::RangeSensor;
use speedo_common::synthetic::SyntheticTrain;

/// Reads the demo train profile against time since construction.
pub struct DemoSonar {
    train: SyntheticTrain<'static>,
    start: Instant,
}

impl DemoSonar {
    pub fn new() -> Self {
        Self {
            train: SyntheticTrain::demo(),
            start: Instant::now(),
        }
    }
}

impl RangeSensor for DemoSonar {
    fn read_distance_cm(&mut self) -> u16 {
        let t = self.start.elapsed().as_micros() as f32 / 1_000_000.0;
        self.train.distance_at(t)
    }
}
