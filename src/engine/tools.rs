//! Path, list-file and rendering utilities for the CLI

use anyhow::{Context, Result};
use log::warn;
use std::path::{Path, PathBuf};

use crate::FileResult;
use crate::report::Report;
use crate::utils::config::THROUGHPUT_UNIT;

/// Human-readable size with 1024-based units: `512 B`, `1.5 KB`, `2.0 GB`.
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let prefix = ['K', 'M', 'G', 'T', 'P', 'E'][exp];
    format!("{:.1} {}B", bytes as f64 / div as f64, prefix)
}

/// Parse a file list: one path per line, trimmed; blank lines and `#` comments skipped.
pub fn parse_file_list(content: &str) -> Vec<PathBuf> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect()
}

/// Read and parse a file list from disk.
pub fn read_file_list(list_path: &Path) -> Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(list_path)
        .with_context(|| format!("read file list {}", list_path.display()))?;
    Ok(parse_file_list(&content))
}

/// Drop paths that do not exist, warning for each. Paths whose existence cannot be determined
/// (e.g. permission denied on a parent) are kept so the hash step reports the real error.
pub fn retain_existing(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| match path.try_exists() {
            Ok(true) | Err(_) => true,
            Ok(false) => {
                warn!("File does not exist: {}", path.display());
                false
            }
        })
        .collect()
}

/// Last path component for display, falling back to the whole path.
pub fn file_basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One line per result: `<digest>  <basename> (<size>, <elapsed>)` or `ERROR: <path> - <reason>`.
pub fn render_result(result: &FileResult) -> String {
    match &result.outcome {
        Ok(hashed) => format!(
            "{}  {} ({}, {:?})",
            hashed.digest,
            file_basename(&result.path),
            format_size(hashed.size),
            result.elapsed
        ),
        Err(e) => format!("ERROR: {} - {}", result.path.display(), e),
    }
}

/// Summary block printed after all results.
pub fn render_summary(report: &Report) -> String {
    let mut out = format!(
        "Summary:\n  Files processed: {}/{}\n  Total size: {}\n  Total time: {:?}",
        report.succeeded,
        report.attempted,
        format_size(report.total_bytes),
        report.elapsed
    );
    if let Some(bytes_per_sec) = report.throughput() {
        out.push_str(&format!(
            "\n  Throughput: {:.2} MB/s",
            bytes_per_sec / THROUGHPUT_UNIT
        ));
    }
    out
}
