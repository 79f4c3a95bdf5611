//! Spinner shown while a query is pending

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner with the placeholder text while a request is in flight
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start (or restart) the spinner
    pub fn start(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        let previous = self.lock().replace(pb);
        if let Some(previous) = previous {
            previous.finish_and_clear();
        }
    }

    /// Stop and erase the spinner, if one is running
    pub fn finish(&self) {
        if let Some(pb) = self.lock().take() {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_finish() {
        let reporter = ProgressReporter::new();
        assert!(!reporter.is_active());

        reporter.start("検索中...");
        assert!(reporter.is_active());
        reporter.start("検索中...");
        assert!(reporter.is_active());

        reporter.finish();
        assert!(!reporter.is_active());
        reporter.finish();
    }
}
