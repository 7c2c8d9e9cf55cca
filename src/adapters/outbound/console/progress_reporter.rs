use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, MutexGuard};

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lookups - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Keeps stdout free for formatted output. Lookup fan-out is drawn as an
/// indicatif bar; the bar is dropped on completion or error so the next
/// evaluation starts a fresh one.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
            quiet: false,
        }
    }

    /// A reporter that prints nothing, for scripted use
    pub fn quiet() -> Self {
        Self {
            progress_bar: Mutex::new(None),
            quiet: true,
        }
    }

    fn bar_slot(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        // A poisoned bar only affects drawing
        self.progress_bar
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn new_bar(total: usize) -> ProgressBar {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("=>-"));
        }
        bar
    }

    fn finish_bar(&self) {
        if let Some(bar) = self.bar_slot().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let mut slot = self.bar_slot();
        let bar = slot.get_or_insert_with(|| Self::new_bar(total));
        bar.set_length(total as u64);
        bar.set_position(current as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_reset_after_completion() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 2, Some("chicken"));
        assert!(reporter.bar_slot().is_some());

        reporter.report_completion("done");
        assert!(reporter.bar_slot().is_none());
    }

    #[test]
    fn test_bar_is_reset_after_error() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 3, None);
        reporter.report_error("failed");
        assert!(reporter.bar_slot().is_none());
    }

    #[test]
    fn test_quiet_reporter_draws_nothing() {
        let reporter = StderrProgressReporter::quiet();
        reporter.report("message");
        reporter.report_progress(1, 2, Some("rice"));
        assert!(reporter.bar_slot().is_none());
    }
}
