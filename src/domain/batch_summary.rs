use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Tally of one batch run. Failed files are also listed as skipped since no
/// artifact was produced for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed_count: usize,
    pub skipped_count: usize,
    pub skipped_files: Vec<String>,
    /// Base filename -> failure reason.
    pub failed_files: BTreeMap<String, String>,
}

impl BatchSummary {
    pub fn record_processed(&mut self) {
        self.processed_count += 1;
    }

    pub fn record_skipped(&mut self, filename: impl Into<String>) {
        self.skipped_files.push(filename.into());
        self.skipped_count = self.skipped_files.len();
    }

    pub fn record_failed(
        &mut self,
        filename: impl Into<String>,
        base_name: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.record_skipped(filename);
        self.failed_files.insert(base_name.into(), reason.into());
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_files.is_empty()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processed: {}, Skipped: {}",
            self.processed_count, self.skipped_count
        )?;

        if self.failed_files.is_empty() {
            return write!(f, "All resumes processed successfully.");
        }

        write!(f, "Failed or incomplete extraction for:")?;
        for (name, reason) in &self.failed_files {
            write!(f, "\n - {} | Reason: {}", name, reason)?;
        }
        Ok(())
    }
}
