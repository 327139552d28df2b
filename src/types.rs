//! Public types for the sumpool API and pipeline.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::utils::config::WorkerThreadLimits;

/// One input path. Consumed exactly once by exactly one worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTask {
    pub path: PathBuf,
}

impl From<PathBuf> for FileTask {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl From<&Path> for FileTask {
    fn from(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

/// Why a single file could not be hashed. Local to that file's task.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to open file: {0}")]
    Open(#[source] io::Error),

    #[error("failed to get file size: {0}")]
    SizeQuery(#[source] io::Error),

    #[error("failed to read file: {0}")]
    Read(#[source] io::Error),
}

/// Successful outcome for one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashedFile {
    /// Lowercase hex digest.
    pub digest: String,
    /// Size reported by the metadata query before hashing.
    pub size: u64,
}

/// Result for one [`FileTask`]. Digest and error are mutually exclusive: `outcome` holds one.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: Result<HashedFile, FileError>,
    /// Wall-clock time from open until finalize (or failure).
    pub elapsed: Duration,
}

impl FileResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn digest(&self) -> Option<&str> {
        self.outcome.as_ref().ok().map(|h| h.digest.as_str())
    }

    pub fn size(&self) -> Option<u64> {
        self.outcome.as_ref().ok().map(|h| h.size)
    }

    pub fn error(&self) -> Option<&FileError> {
        self.outcome.as_ref().err()
    }
}

/// Digest algorithm. Both produce 256-bit digests (64 hex chars).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Blake3 => write!(f, "blake3"),
        }
    }
}

/// Pool settings, resolved once before processing starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    workers: usize,
    pub algorithm: HashAlgorithm,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::from_requested(None)
    }
}

impl PoolConfig {
    /// Resolve a requested worker count against the threads available on this host.
    ///
    /// `None`, zero and negative values all fall back to `min(available, 4)`, never below 1.
    pub fn resolve(requested: Option<i64>, available: usize) -> Self {
        let workers = match requested {
            Some(n) if n > 0 => n as usize,
            _ => available.clamp(
                WorkerThreadLimits::MIN_WORKERS,
                WorkerThreadLimits::DEFAULT_WORKERS,
            ),
        };
        Self {
            workers,
            algorithm: HashAlgorithm::default(),
        }
    }

    /// [`resolve`](Self::resolve) using the current host's available threads.
    pub fn from_requested(requested: Option<i64>) -> Self {
        Self::resolve(requested, WorkerThreadLimits::current().all_threads)
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

/// CLI options after merging the settings file with command-line flags.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Paths given on the command line.
    pub files: Vec<PathBuf>,
    /// Text file with one path per line.
    pub list: Option<PathBuf>,
    /// Requested worker count. `None`, zero or negative means the default.
    pub workers: Option<i64>,
    pub algorithm: HashAlgorithm,
    /// Debug logging and a progress bar.
    pub verbose: bool,
}

impl Opts {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::from_requested(self.workers).with_algorithm(self.algorithm)
    }
}
