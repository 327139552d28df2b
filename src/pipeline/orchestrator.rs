use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use log::{debug, error};
use std::path::Path;
use std::thread::{self, JoinHandle};

use crate::pipeline::{self, check_for_lost_results};
use crate::utils::config::PackagePaths;
use crate::utils::fd_limit::check_workers_against_fd_limit;
use crate::{FileResult, FileTask, PoolConfig};

/// Start the hash pipeline over `paths`. Returns handles; caller receives from `result_rx` until it
/// disconnects, then calls [`shutdown_pipeline_handles`].
///
/// Workers are spawned before any task is dispatched. Results arrive in completion order, not
/// input order. Empty input spawns nothing and returns an already-closed stream.
pub fn run_pipeline<P: AsRef<Path>>(
    paths: &[P],
    config: PoolConfig,
) -> Result<pipeline::PipelineHandles> {
    if paths.is_empty() {
        debug!("No files to hash; pipeline not started");
        return Ok(pipeline::empty_pipeline_handles());
    }

    let workers = config.workers();
    check_workers_against_fd_limit(workers);

    let pipeline::PipelineChannels {
        task_tx,
        task_rx,
        result_tx,
        result_rx,
    } = pipeline::create_pipeline_channels(paths.len());

    let worker_handles =
        pipeline::spawn_hash_workers(task_rx, &result_tx, workers, config.algorithm)?;
    // Supervisor takes the last original result sender; the stream closes when it drops it.
    let supervisor_handle = spawn_supervisor(worker_handles, result_tx)?;

    for path in paths {
        task_tx
            .send(FileTask::from(path.as_ref()))
            .map_err(|_| anyhow::anyhow!("all hash workers exited before dispatch finished"))?;
    }
    // Dropping the only task sender closes the queue so workers exit once it drains.
    drop(task_tx);
    debug!("Dispatched {} files to {} workers", paths.len(), workers);

    Ok(pipeline::PipelineHandles {
        result_rx,
        supervisor_handle: Some(supervisor_handle),
        task_count: paths.len(),
        workers,
    })
}

/// Join every worker, then close the result stream. Returns the number of workers that panicked.
fn spawn_supervisor(
    worker_handles: Vec<JoinHandle<()>>,
    result_tx: Sender<FileResult>,
) -> Result<JoinHandle<usize>> {
    thread::Builder::new()
        .name(format!("{}-supervisor", PackagePaths::get().pkg_name()))
        .spawn(move || {
            let panicked = worker_handles
                .into_iter()
                .map(JoinHandle::join)
                .filter(Result::is_err)
                .count();
            if panicked > 0 {
                error!("{} hash worker(s) panicked", panicked);
            }
            drop(result_tx);
            panicked
        })
        .context("spawn pipeline supervisor")
}

/// Join the supervisor after the stream is drained and verify nothing was lost.
pub fn shutdown_pipeline_handles(
    supervisor_handle: Option<JoinHandle<usize>>,
    task_count: usize,
    received: usize,
) -> Result<()> {
    let panicked = match supervisor_handle {
        Some(h) => h
            .join()
            .map_err(|_| anyhow::anyhow!("pipeline supervisor panicked"))?,
        None => 0,
    };
    check_for_lost_results(panicked, task_count, received)
}

/// Hash every path and collect the full, unordered result set (one per input path).
pub fn collect_results<P: AsRef<Path>>(
    paths: &[P],
    config: PoolConfig,
) -> Result<Vec<FileResult>> {
    let pipeline::PipelineHandles {
        result_rx,
        supervisor_handle,
        task_count,
        workers: _,
    } = run_pipeline(paths, config)?;

    let mut results = Vec::with_capacity(task_count);
    while let Ok(result) = result_rx.recv() {
        results.push(result);
    }
    debug!("main: result stream closed, {} results", results.len());

    shutdown_pipeline_handles(supervisor_handle, task_count, results.len())?;
    Ok(results)
}
