//! Application configuration constants.
//! Tuning and thresholds in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    settings_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                settings_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Optional settings file looked up in the working directory (e.g. `.sumpool.toml`).
    pub fn settings_filename(&self) -> &str {
        &self.settings_filename
    }
}

// ---- Worker threads ----

/// Worker count limits.
/// Use [`WorkerThreadLimits::current()`] to fill `all_threads` from rayon; the rest are const.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
}

impl WorkerThreadLimits {
    /// Default worker count when none (or a non-positive one) is requested. Caps disk contention
    /// even on hosts with many more logical CPUs.
    pub const DEFAULT_WORKERS: usize = 4;
    pub const MIN_WORKERS: usize = 1;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
        }
    }
}

// ---- Hashing ----

/// Hashing I/O buffer sizes.
pub struct HashingConsts;

impl HashingConsts {
    /// Read buffer per task (bytes). 64 KiB, reused for every chunk of one file.
    pub const READ_BUFFER_SIZE: usize = 64 * 1024;
}

// ---- Progress ----

pub struct ProgressConsts;

impl ProgressConsts {
    pub const BAR_DESC: &'static str = "Hashing";
}

// ---- Summary ----

/// Bytes per "MB" in the throughput line (MiB, matching `format_size`).
pub const THROUGHPUT_UNIT: f64 = 1024.0 * 1024.0;
