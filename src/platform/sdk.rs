//! Host platform hooks

/// Signals sent to the hosting platform
pub trait PlatformSdk {
    /// A run ended with `score`; called once per run
    fn report_game_over(&mut self, score: u64);
}

/// No platform attached
#[derive(Debug, Default)]
pub struct NullSdk;

impl PlatformSdk for NullSdk {
    fn report_game_over(&mut self, score: u64) {
        log::debug!("No platform SDK; final score {} not reported", score);
    }
}

/// Keeps every reported score (headless runs, tests)
#[derive(Debug, Default, Clone)]
pub struct RecordingSdk {
    pub reports: Vec<u64>,
}

impl PlatformSdk for RecordingSdk {
    fn report_game_over(&mut self, score: u64) {
        self.reports.push(score);
    }
}
