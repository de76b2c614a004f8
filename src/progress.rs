//! Row-progress reporting for the streaming pipelines.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Rows between console milestone messages.
const MILESTONE_ROWS: u64 = 1_000_000;

/// Receives per-row callbacks from a pipeline, so progress output stays out
/// of the transformation logic and tests can run silently.
pub trait ProgressObserver {
    /// Called once per input row, with the running processed count.
    fn row_processed(&mut self, rows: u64);

    /// Called once per retained row, with the running kept count.
    fn row_kept(&mut self, _rows: u64) {}
}

/// Console reporter backed by an indicatif spinner.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Failed to set progress bar style"),
        );
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        ConsoleProgress { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for ConsoleProgress {
    fn row_processed(&mut self, rows: u64) {
        if rows % MILESTONE_ROWS == 0 {
            self.bar.println(format!("Processed {} rows", rows));
        }
    }
}

/// No-op observer for tests and quiet runs.
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn row_processed(&mut self, _rows: u64) {}
}
