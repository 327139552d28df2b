//! Pipeline channels and handles shared between the dispatcher, workers, supervisor and consumer.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::thread::JoinHandle;

use crate::{FileResult, FileTask};

/// Handles returned by [`run_pipeline`](super::run_pipeline) for streaming: receive results and
/// join the supervisor when done.
///
/// `result_rx` disconnects once every worker has exited, so `while let Ok(r) = result_rx.recv()`
/// ends on its own. `supervisor_handle` yields the number of workers that panicked; it is `None`
/// when no workers were spawned (empty input).
pub struct PipelineHandles {
    pub result_rx: Receiver<FileResult>,
    pub supervisor_handle: Option<JoinHandle<usize>>,
    /// Number of tasks dispatched; the stream carries exactly this many results.
    pub task_count: usize,
    /// Number of worker threads spawned.
    pub workers: usize,
}

/// Task and result queues, both sized to hold every task so neither side blocks on the other.
/// Dispatcher gets `task_tx`; workers get `task_rx` and clones of `result_tx`; the supervisor owns
/// the original `result_tx`; the consumer gets `result_rx`.
pub struct PipelineChannels {
    pub task_tx: Sender<FileTask>,
    pub task_rx: Receiver<FileTask>,
    pub result_tx: Sender<FileResult>,
    pub result_rx: Receiver<FileResult>,
}

pub fn create_pipeline_channels(task_count: usize) -> PipelineChannels {
    let (task_tx, task_rx) = bounded::<FileTask>(task_count);
    let (result_tx, result_rx) = bounded::<FileResult>(task_count);
    PipelineChannels {
        task_tx,
        task_rx,
        result_tx,
        result_rx,
    }
}

/// Handles for an empty batch: a result stream that is already closed, no threads.
pub fn empty_pipeline_handles() -> PipelineHandles {
    let (result_tx, result_rx) = bounded::<FileResult>(0);
    drop(result_tx);
    PipelineHandles {
        result_rx,
        supervisor_handle: None,
        task_count: 0,
        workers: 0,
    }
}
