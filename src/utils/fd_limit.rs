//! File descriptor limit detection for sanity-checking the worker count (Unix).

use log::warn;

/// File descriptors held by one hashing worker: the open source file.
pub const FDS_PER_WORKER: usize = 1;

/// Fraction of the process FD limit workers may use (leave headroom for stdio, channels, etc.).
const FD_LIMIT_FRACTION: f64 = 0.8;

/// Returns the soft limit for max open file descriptors, or `None` if unavailable (e.g. Windows).
#[cfg(unix)]
pub fn max_open_fds() -> Option<u64> {
    use std::mem::MaybeUninit;
    let mut rlim = MaybeUninit::<libc::rlimit>::uninit();
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, rlim.as_mut_ptr()) } != 0 {
        return None;
    }
    let rlim = unsafe { rlim.assume_init() };
    let cur = rlim.rlim_cur;
    // RLIM_INFINITY is typically !0 or u64::MAX; treat as "no practical limit"
    if cur == libc::RLIM_INFINITY || cur > i64::MAX as u64 {
        return None;
    }
    Some(cur)
}

#[cfg(not(unix))]
pub fn max_open_fds() -> Option<u64> {
    None
}

/// Max workers that stay under ~80% of the FD limit, or `None` if no limit is available.
pub fn max_workers_by_fd_limit() -> Option<usize> {
    let limit = max_open_fds()?;
    let usable = (limit as f64 * FD_LIMIT_FRACTION) as usize;
    Some((usable / FDS_PER_WORKER).max(1))
}

/// Warn when `workers` would exceed the FD headroom. The count itself is left as requested.
/// Returns false when a warning was emitted.
pub fn check_workers_against_fd_limit(workers: usize) -> bool {
    match max_workers_by_fd_limit() {
        Some(cap) if workers > cap => {
            warn!(
                "{} workers may exhaust the open-file limit (~{} usable); expect open failures",
                workers, cap
            );
            false
        }
        _ => true,
    }
}
