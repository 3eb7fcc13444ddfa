//! Sonar stand-in reading a synthetic train at virtual time.

use speedo_common::RangeSensor;
use speedo_common::synthetic::SyntheticTrain;

use crate::timing::VirtualClock;

pub struct SimulatedSonar {
    train: SyntheticTrain<'static>,
    clock: VirtualClock,
}

impl SimulatedSonar {
    pub fn new(
        train: SyntheticTrain<'static>,
        clock: VirtualClock,
    ) -> Self {
        Self { train, clock }
    }
}

impl RangeSensor for SimulatedSonar {
    fn read_distance_cm(&mut self) -> u16 { self.train.distance_at(self.clock.now_s()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SINGLE_PASS: [f32; 1] = [10.0];

    #[test]
    fn test_reads_train_at_clock_time() {
        let clock = VirtualClock::new();
        let train = SyntheticTrain::new(&SINGLE_PASS).with_wobble(0.0);
        let mut sonar = SimulatedSonar::new(train, clock.clone());

        let first = sonar.read_distance_cm();
        assert_eq!(first, train.distance_at(0.0));

        clock.advance_ns(2_000_000_000);
        let later = sonar.read_distance_cm();
        assert_eq!(later, train.distance_at(2.0));
        assert_eq!(first - later, 20);
    }
}
