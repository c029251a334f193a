use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ports::BatchProgress;

const PROGRESS_TEMPLATE: &str = "{prefix} [{bar:40}] {pos}/{len} {wide_msg}";
const PROGRESS_PREFIX: &str = "Processing Resumes";

/// Terminal progress bar for CLI batch runs.
pub struct ProgressBarReporter {
    bar: ProgressBar,
}

impl ProgressBarReporter {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    pub fn with_bar(bar: ProgressBar) -> Self {
        match ProgressStyle::with_template(PROGRESS_TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("=> ")),
            Err(e) => tracing::debug!(error = %e, "Falling back to default progress style"),
        }
        bar.set_prefix(PROGRESS_PREFIX);
        Self { bar }
    }
}

impl Default for ProgressBarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgress for ProgressBarReporter {
    fn started(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn file_done(&self, filename: &str) {
        self.bar.set_message(filename.to_string());
        self.bar.inc(1);
    }

    fn finished(&self) {
        self.bar.finish_and_clear();
    }
}
