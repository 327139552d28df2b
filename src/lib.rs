//! Sumpool: concurrent checksums for large file sets in bounded memory

pub mod engine;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use report::{Report, ReportBuilder};
pub use types::*;

use log::debug;
use std::path::Path;

/// Result alias used by public sumpool API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: hash every path in `paths` on a pool of `config.workers()` threads.
///
/// Returns one [`FileResult`] per input path, in completion order (not input order). Per-file
/// failures live in each result's `outcome` and never abort the batch; `Err` is returned only when
/// the pool itself could not run (a thread failed to spawn or a worker panicked).
///
/// ```no_run
/// let config = sumpool::PoolConfig::from_requested(None);
/// let results = sumpool::hash_files(&["a.iso", "b.bin"], &config)?;
/// let report = sumpool::Report::from_results(&results, std::time::Duration::ZERO);
/// assert_eq!(report.attempted, 2);
/// # Ok::<(), sumpool::Error>(())
/// ```
pub fn hash_files<P: AsRef<Path>>(paths: &[P], config: &PoolConfig) -> Result<Vec<FileResult>> {
    debug!(
        "{} CONFIG: {:?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        config
    );
    pipeline::collect_results(paths, *config)
}
