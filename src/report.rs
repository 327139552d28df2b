//! Batch aggregation: success/failure counts, successful bytes, throughput, exit policy.

use std::time::Duration;

use crate::FileResult;

/// Summary of one batch run. Derived from the result stream; not persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub attempted: usize,
    pub succeeded: usize,
    /// Sum of sizes of successful results only.
    pub total_bytes: u64,
    /// Wall-clock time of the whole batch, dispatch through full drain.
    pub elapsed: Duration,
}

impl Report {
    pub fn from_results(results: &[FileResult], elapsed: Duration) -> Self {
        let mut builder = ReportBuilder::default();
        for result in results {
            builder.record(result);
        }
        builder.finish(elapsed)
    }

    pub fn failed(&self) -> usize {
        self.attempted.saturating_sub(self.succeeded)
    }

    /// Bytes per second, or `None` when nothing was hashed or no measurable time passed.
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 && self.total_bytes > 0 {
            Some(self.total_bytes as f64 / secs)
        } else {
            None
        }
    }

    /// True when any attempted file failed. The CLI turns this into a non-zero exit.
    pub fn is_partial_failure(&self) -> bool {
        self.succeeded < self.attempted
    }
}

/// Incremental aggregation so a streaming consumer can record results as they arrive.
#[derive(Clone, Debug, Default)]
pub struct ReportBuilder {
    attempted: usize,
    succeeded: usize,
    total_bytes: u64,
}

impl ReportBuilder {
    pub fn record(&mut self, result: &FileResult) {
        self.attempted += 1;
        if let Some(size) = result.size() {
            self.succeeded += 1;
            self.total_bytes += size;
        }
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn finish(self, elapsed: Duration) -> Report {
        Report {
            attempted: self.attempted,
            succeeded: self.succeeded,
            total_bytes: self.total_bytes,
            elapsed,
        }
    }
}
