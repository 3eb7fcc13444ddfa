//! Session statistics shown on the simulator panel.

use speedo_common::CycleReport;

/// Running totals over every cycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Cycles run.
    pub cycles: u32,
    /// Cycles whose speed was shown.
    pub displayed: u32,
    /// Cycles at or below the display threshold.
    pub suppressed: u32,
    /// Displayed cycles clamped to the display range.
    pub saturated: u32,
    /// Highest speed shown, in mph.
    pub peak: u32,
    /// Last speed shown, in mph.
    pub last: Option<u32>,
}

impl SessionStats {
    pub fn new() -> Self { Self::default() }

    pub fn record(
        &mut self,
        report: &CycleReport,
    ) {
        self.cycles += 1;

        let Some(render) = report.render else {
            self.suppressed += 1;
            return;
        };

        self.displayed += 1;
        if render.saturated {
            self.saturated += 1;
        }
        self.peak = self.peak.max(render.shown);
        self.last = Some(render.shown);
    }
}
