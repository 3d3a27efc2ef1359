//! Progress reporting for history traversal
//!
//! Keeps indicatif out of the walking logic.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// A handle to an active progress display
pub trait ProgressHandle {
    fn inc(&self, n: u64);
    fn finish(&self);
}

/// Factory for progress handles
pub trait ProgressReporter {
    fn start(&self, label: &str, total: u64) -> Box<dyn ProgressHandle>;
}

/// Progress bar on stderr
pub struct IndicatifProgress;

impl ProgressReporter for IndicatifProgress {
    fn start(&self, label: &str, total: u64) -> Box<dyn ProgressHandle> {
        let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {msg}: [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message(label.to_string());
        Box::new(pb)
    }
}

impl ProgressHandle for ProgressBar {
    fn inc(&self, n: u64) {
        ProgressBar::inc(self, n);
    }

    fn finish(&self) {
        self.finish_and_clear();
    }
}

/// Shows nothing; used by tests and `--quiet`
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _label: &str, _total: u64) -> Box<dyn ProgressHandle> {
        Box::new(NoopHandle)
    }
}

struct NoopHandle;

impl ProgressHandle for NoopHandle {
    fn inc(&self, _n: u64) {}
    fn finish(&self) {}
}

/// Pick a reporter for the given quietness
pub fn reporter(quiet: bool) -> Box<dyn ProgressReporter> {
    if quiet {
        Box::new(NoopProgress)
    } else {
        Box::new(IndicatifProgress)
    }
}
