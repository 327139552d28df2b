use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use log::debug;
use std::thread::{self, JoinHandle};

use crate::engine::hashing::hash_file;
use crate::utils::config::PackagePaths;
use crate::{FileResult, FileTask, HashAlgorithm};

/// Single hash worker: pull tasks one at a time until the queue is closed and drained.
fn hash_worker_loop(
    task_rx: Receiver<FileTask>,
    result_tx: Sender<FileResult>,
    algorithm: HashAlgorithm,
) -> usize {
    let mut handled = 0_usize;
    while let Ok(task) = task_rx.recv() {
        let result = hash_file(&task.path, algorithm);
        handled += 1;
        if result_tx.send(result).is_err() {
            // Consumer is gone; nothing left to report to.
            break;
        }
    }
    handled
}

/// Spawn `workers` hash workers. Caller must drop its `task_tx` after dispatching so workers exit,
/// and keep `result_tx` open only as long as it wants the stream to stay open.
pub fn spawn_hash_workers(
    task_rx: Receiver<FileTask>,
    result_tx: &Sender<FileResult>,
    workers: usize,
    algorithm: HashAlgorithm,
) -> Result<Vec<JoinHandle<()>>> {
    let pkg = PackagePaths::get().pkg_name();
    (0..workers)
        .map(|worker_id| {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            thread::Builder::new()
                .name(format!("{pkg}-worker-{worker_id}"))
                .spawn(move || {
                    let handled = hash_worker_loop(task_rx, result_tx, algorithm);
                    debug!("worker {} done after {} files", worker_id, handled);
                })
                .with_context(|| format!("spawn hash worker {worker_id}"))
        })
        .collect()
}
