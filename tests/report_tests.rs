//! Aggregation tests: byte totals, throughput omission, partial failure policy.

use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::time::Duration;

use sumpool::{FileError, FileResult, HashedFile, Report, ReportBuilder};

fn ok(name: &str, size: u64) -> FileResult {
    FileResult {
        path: PathBuf::from(name),
        outcome: Ok(HashedFile {
            digest: "0".repeat(64),
            size,
        }),
        elapsed: Duration::from_millis(5),
    }
}

fn failed(name: &str) -> FileResult {
    FileResult {
        path: PathBuf::from(name),
        outcome: Err(FileError::Open(io::Error::from(ErrorKind::NotFound))),
        elapsed: Duration::from_micros(10),
    }
}

#[test]
fn test_bytes_only_from_successes() {
    let results = vec![ok("a", 100), failed("b"), ok("c", 23), failed("d")];
    let report = Report::from_results(&results, Duration::from_secs(1));
    assert_eq!(report.attempted, 4);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.total_bytes, 123);
}

#[test]
fn test_partial_failure() {
    let report = Report::from_results(&[ok("a", 1), failed("b")], Duration::from_secs(1));
    assert!(report.is_partial_failure());

    let report = Report::from_results(&[failed("b")], Duration::from_secs(1));
    assert!(report.is_partial_failure());
}

#[test]
fn test_all_success_including_empty_file() {
    let report = Report::from_results(&[ok("a", 10), ok("empty", 0)], Duration::from_secs(1));
    assert!(!report.is_partial_failure());
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.total_bytes, 10);
}

#[test]
fn test_empty_batch() {
    let report = Report::from_results(&[], Duration::ZERO);
    assert_eq!(report, Report::default());
    assert!(!report.is_partial_failure());
    assert!(report.throughput().is_none());
}

#[test]
fn test_failed_never_underflows() {
    let inconsistent = Report {
        attempted: 1,
        succeeded: 3,
        total_bytes: 0,
        elapsed: Duration::ZERO,
    };
    assert_eq!(inconsistent.failed(), 0);
    assert!(!inconsistent.is_partial_failure());
}

#[test]
fn test_throughput() {
    let report = Report::from_results(&[ok("a", 2048)], Duration::from_secs(2));
    assert_eq!(report.throughput(), Some(1024.0));
}

#[test]
fn test_throughput_omitted_without_time_or_bytes() {
    let no_time = Report::from_results(&[ok("a", 2048)], Duration::ZERO);
    assert!(no_time.throughput().is_none());

    let no_bytes = Report::from_results(&[ok("empty", 0), failed("b")], Duration::from_secs(3));
    assert!(no_bytes.throughput().is_none());
}

#[test]
fn test_builder_matches_batch() {
    let results = vec![ok("a", 5), failed("b"), ok("c", 7)];
    let mut builder = ReportBuilder::default();
    for r in &results {
        builder.record(r);
    }
    assert_eq!(builder.attempted(), 3);
    let elapsed = Duration::from_millis(250);
    assert_eq!(builder.finish(elapsed), Report::from_results(&results, elapsed));
}
