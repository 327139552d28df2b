//! Streaming digest tests: known digests, size reporting, and each failure mode.

use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use sumpool::engine::{ByteSource, hash_bytes, hash_file, hash_source};
use sumpool::{FileError, HashAlgorithm};

const HELLO: &[u8] = b"Hello, World!";
const HELLO_SHA256: &str = "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f";
const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn is_lower_hex_64(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Source that replays scripted reads, then reports end of stream.
struct ScriptedSource {
    declared_len: io::Result<u64>,
    reads: VecDeque<io::Result<Vec<u8>>>,
}

impl ScriptedSource {
    fn new(declared_len: u64, reads: Vec<io::Result<Vec<u8>>>) -> Self {
        Self {
            declared_len: Ok(declared_len),
            reads: reads.into(),
        }
    }
}

impl Read for ScriptedSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reads.pop_front() {
            None => Ok(0),
            Some(Err(e)) => Err(e),
            Some(Ok(chunk)) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
        }
    }
}

impl ByteSource for ScriptedSource {
    fn byte_len(&self) -> io::Result<u64> {
        match &self.declared_len {
            Ok(n) => Ok(*n),
            Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

// --- known digests ---

#[test]
fn test_hello_world_matches_conventional_sha256() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    std::fs::write(&path, HELLO).unwrap();

    let result = hash_file(&path, HashAlgorithm::Sha256);
    assert_eq!(result.digest(), Some(HELLO_SHA256));
    assert_eq!(result.digest(), Some(sha256_hex(HELLO).as_str()));
    assert_eq!(result.size(), Some(13));
    assert_eq!(result.path, path);
}

#[test]
fn test_empty_file_is_success_with_empty_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty");
    std::fs::File::create(&path).unwrap();

    let result = hash_file(&path, HashAlgorithm::Sha256);
    assert!(result.is_success());
    assert!(result.error().is_none());
    assert_eq!(result.size(), Some(0));
    assert_eq!(result.digest(), Some(EMPTY_SHA256));
}

#[test]
fn test_same_bytes_same_digest() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.bin");
    let b = dir.path().join("b.bin");
    let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(&a, &data).unwrap();
    std::fs::write(&b, &data).unwrap();

    let first = hash_file(&a, HashAlgorithm::Sha256);
    let again = hash_file(&a, HashAlgorithm::Sha256);
    let other = hash_file(&b, HashAlgorithm::Sha256);
    let digest = first.digest().unwrap();
    assert!(is_lower_hex_64(digest));
    assert_eq!(again.digest(), Some(digest));
    assert_eq!(other.digest(), Some(digest));
}

#[test]
fn test_multi_chunk_file_size_and_digest() {
    // Spans several 64 KiB reads and ends mid-buffer.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bin");
    let data: Vec<u8> = (0..(3 * 64 * 1024 + 777)).map(|i| (i * 7 % 256) as u8).collect();
    std::fs::write(&path, &data).unwrap();

    let result = hash_file(&path, HashAlgorithm::Sha256);
    assert_eq!(result.size(), Some(data.len() as u64));
    assert_eq!(result.digest(), Some(sha256_hex(&data).as_str()));
}

#[test]
fn test_blake3_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    std::fs::write(&path, HELLO).unwrap();

    let result = hash_file(&path, HashAlgorithm::Blake3);
    let expected = blake3::hash(HELLO).to_hex().to_string();
    assert_eq!(result.digest(), Some(expected.as_str()));
    assert!(is_lower_hex_64(result.digest().unwrap()));
    assert_ne!(result.digest(), Some(HELLO_SHA256));
}

#[test]
fn test_hash_bytes_matches_file_digest() {
    assert_eq!(hash_bytes(HELLO, HashAlgorithm::Sha256), HELLO_SHA256);
    assert_eq!(hash_bytes(b"", HashAlgorithm::Sha256), EMPTY_SHA256);
}

// --- failures ---

#[test]
fn test_missing_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist");

    let result = hash_file(&path, HashAlgorithm::Sha256);
    assert!(!result.is_success());
    assert!(result.digest().is_none());
    assert!(result.size().is_none());
    match result.error() {
        Some(FileError::Open(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
        other => panic!("expected open error, got {:?}", other),
    }
}

#[test]
fn test_open_failure_from_custom_opener() {
    let result = hash_source(Path::new("locked"), HashAlgorithm::Sha256, |_| {
        Err::<ScriptedSource, _>(io::Error::from(ErrorKind::PermissionDenied))
    });
    assert!(matches!(result.error(), Some(FileError::Open(_))));
}

#[test]
fn test_size_query_failure_is_distinct_from_open_failure() {
    let result = hash_source(Path::new("vanishing"), HashAlgorithm::Sha256, |_| {
        Ok(ScriptedSource {
            declared_len: Err(io::Error::other("stat failed")),
            reads: VecDeque::new(),
        })
    });
    assert!(result.digest().is_none());
    match result.error() {
        Some(FileError::SizeQuery(_)) => {}
        other => panic!("expected size query error, got {:?}", other),
    }
    assert!(
        result
            .error()
            .unwrap()
            .to_string()
            .contains("failed to get file size")
    );
}

#[test]
fn test_read_failure_discards_partial_digest() {
    let result = hash_source(Path::new("flaky"), HashAlgorithm::Sha256, |_| {
        Ok(ScriptedSource::new(
            10,
            vec![Ok(vec![1, 2, 3, 4]), Err(io::Error::other("disk error"))],
        ))
    });
    assert!(result.digest().is_none());
    assert!(result.size().is_none());
    assert!(matches!(result.error(), Some(FileError::Read(_))));
}

#[test]
fn test_interrupted_read_is_retried() {
    let result = hash_source(Path::new("interrupted"), HashAlgorithm::Sha256, |_| {
        Ok(ScriptedSource::new(
            13,
            vec![
                Ok(b"Hello, ".to_vec()),
                Err(io::Error::from(ErrorKind::Interrupted)),
                Ok(b"World!".to_vec()),
            ],
        ))
    });
    assert_eq!(result.digest(), Some(HELLO_SHA256));
    assert_eq!(result.size(), Some(13));
}

#[test]
fn test_declared_size_is_reported() {
    // Source shrank after the size query: the declared size is still what gets reported.
    let result = hash_source(Path::new("shrunk"), HashAlgorithm::Sha256, |_| {
        Ok(ScriptedSource::new(20, vec![Ok(HELLO.to_vec())]))
    });
    assert_eq!(result.size(), Some(20));
    assert_eq!(result.digest(), Some(HELLO_SHA256));
}

#[test]
fn test_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = hash_file(dir.path(), HashAlgorithm::Sha256);
    assert!(!result.is_success());
    assert!(result.digest().is_none());
}
