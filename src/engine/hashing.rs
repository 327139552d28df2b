//! Streaming file digests: fixed-size chunked reads into an incremental accumulator.

use log::{debug, warn};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;
use std::time::Instant;

use crate::utils::config::HashingConsts;
use crate::{FileError, FileResult, HashAlgorithm, HashedFile};

/// A readable byte source that can report its declared length before reading.
pub trait ByteSource: Read {
    fn byte_len(&self) -> io::Result<u64>;
}

impl ByteSource for File {
    fn byte_len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }
}

/// Incremental hash state. One per task, never shared.
enum Accumulator {
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl Accumulator {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha256 => Accumulator::Sha256(Sha256::new()),
            HashAlgorithm::Blake3 => Accumulator::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, chunk: &[u8]) {
        match self {
            Accumulator::Sha256(h) => h.update(chunk),
            Accumulator::Blake3(h) => {
                h.update(chunk);
            }
        }
    }

    /// Lowercase hex of the final digest.
    fn finalize_hex(self) -> String {
        match self {
            Accumulator::Sha256(h) => hex::encode(h.finalize()),
            Accumulator::Blake3(h) => h.finalize().to_hex().to_string(),
        }
    }
}

/// Hash the file at `path`. Never panics on I/O problems; failures land in the result's outcome.
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> FileResult {
    // `File::open` as a bare fn item is not general over the path lifetime.
    hash_source(path, algorithm, |p| File::open(p))
}

/// Hash whatever `open` yields for `path`. `elapsed` covers open through finalize (or failure).
pub fn hash_source<S, F>(path: &Path, algorithm: HashAlgorithm, open: F) -> FileResult
where
    S: ByteSource,
    F: FnOnce(&Path) -> io::Result<S>,
{
    let start = Instant::now();
    let outcome = digest_source(path, algorithm, open);
    let elapsed = start.elapsed();
    if let Err(ref e) = outcome {
        debug!("{}: {}", path.display(), e);
    }
    FileResult {
        path: path.to_path_buf(),
        outcome,
        elapsed,
    }
}

/// The source is dropped (closed) before this returns, on every path.
fn digest_source<S, F>(
    path: &Path,
    algorithm: HashAlgorithm,
    open: F,
) -> Result<HashedFile, FileError>
where
    S: ByteSource,
    F: FnOnce(&Path) -> io::Result<S>,
{
    let mut source = open(path).map_err(FileError::Open)?;
    let size = source.byte_len().map_err(FileError::SizeQuery)?;

    let mut accumulator = Accumulator::new(algorithm);
    let mut buffer = vec![0u8; HashingConsts::READ_BUFFER_SIZE];
    let mut bytes_read = 0_u64;
    loop {
        match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                accumulator.update(&buffer[..n]);
                bytes_read += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FileError::Read(e)),
        }
    }
    let digest = accumulator.finalize_hex();

    if bytes_read != size {
        warn!(
            "{}: size changed while hashing (expected {} bytes, read {})",
            path.display(),
            size,
            bytes_read
        );
    }
    Ok(HashedFile { digest, size })
}

/// Digest of an in-memory byte slice, same rendering as [`hash_file`].
pub fn hash_bytes(data: &[u8], algorithm: HashAlgorithm) -> String {
    let mut accumulator = Accumulator::new(algorithm);
    accumulator.update(data);
    accumulator.finalize_hex()
}
