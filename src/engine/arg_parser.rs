use clap::Parser;
use std::path::PathBuf;

use crate::HashAlgorithm;

/// Concurrent checksums for large file sets.
#[derive(Clone, Parser)]
#[command(name = "sumpool", version)]
#[command(
    about = "Calculate SHA-256 checksums for many files concurrently, in bounded memory.",
    after_help = "File list format: one path per line; blank lines and lines starting with # are ignored."
)]
pub struct Cli {
    /// Files to hash.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Read file paths from a text file (one per line).
    #[arg(long, short = 'l', value_name = "LIST")]
    pub list: Option<PathBuf>,

    /// Number of concurrent workers. Zero or negative uses the default (4, or fewer CPUs).
    #[arg(long, short = 'w', allow_negative_numbers = true, value_parser = clap::value_parser!(i64))]
    pub workers: Option<i64>,

    /// Digest algorithm.
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: Option<HashAlgorithm>,

    /// Verbose output: debug logging and a progress bar.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
