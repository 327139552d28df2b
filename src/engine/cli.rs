//! CLI command handler: gather and validate paths, run the pipeline, print results and summary.

use anyhow::Result;
use kdam::Animation;
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Instant;

use crate::engine::arg_parser::Cli;
use crate::engine::progress::{
    ProgressBarConfig, close_progress_bar, create_progress_bar, update_progress_bar,
};
use crate::engine::tools::{read_file_list, render_result, render_summary, retain_existing};
use crate::pipeline::{PipelineHandles, run_pipeline, shutdown_pipeline_handles};
use crate::report::ReportBuilder;
use crate::utils::config::ProgressConsts;
use crate::utils::{Colors, apply_file_to_settings, load_settings_toml, setup_logging};
use crate::{FileResult, Opts};

/// Merge `.sumpool.toml` (if any) with CLI flags; flags win. Sets up logging.
fn setup_opts(cli: &Cli) -> Opts {
    let mut opts = Opts::default();
    let settings = std::env::current_dir().map(|cwd| load_settings_toml(&cwd));
    if let Ok(Ok(Some(ref file))) = settings {
        apply_file_to_settings(file, &mut opts);
    }

    opts.files = cli.files.clone();
    if let Some(ref list) = cli.list {
        opts.list = Some(list.clone());
    }
    if let Some(n) = cli.workers {
        opts.workers = Some(n);
    }
    if let Some(algorithm) = cli.algorithm {
        opts.algorithm = algorithm;
    }
    if cli.verbose {
        opts.verbose = true;
    }

    setup_logging(opts.verbose);
    if let Ok(Err(e)) = settings {
        warn!("Ignoring settings file: {:#}", e);
    }
    opts
}

/// Positional files plus list-file entries, minus paths that do not exist.
pub fn gather_paths(opts: &Opts) -> Result<Vec<PathBuf>> {
    let mut paths = opts.files.clone();
    if let Some(ref list) = opts.list {
        paths.extend(read_file_list(list)?);
    }
    if paths.is_empty() {
        return Err(anyhow::anyhow!("no files specified"));
    }
    let valid = retain_existing(paths);
    if valid.is_empty() {
        return Err(anyhow::anyhow!("no valid files to process"));
    }
    Ok(valid)
}

fn print_result(result: &FileResult) {
    let line = render_result(result);
    if result.is_success() {
        println!("{}", line);
    } else {
        println!("{}", Colors::colorize(Colors::FAILED, &line));
    }
}

/// Hash every requested file. Returns an error (non-zero exit) when any file failed.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    let paths = gather_paths(&opts)?;
    let config = opts.pool_config();

    println!(
        "Processing {} files with {} workers...\n",
        paths.len(),
        config.workers()
    );
    debug!("Algorithm: {}", config.algorithm);

    let start_time = Instant::now();
    let PipelineHandles {
        result_rx,
        supervisor_handle,
        task_count,
        ..
    } = run_pipeline(&paths, config)?;

    let bar = opts.verbose.then(|| {
        create_progress_bar(ProgressBarConfig::new(
            task_count,
            ProgressConsts::BAR_DESC,
            Animation::Classic,
        ))
    });

    let mut report = ReportBuilder::default();
    while let Ok(result) = result_rx.recv() {
        print_result(&result);
        report.record(&result);
        if let Some(ref bar) = bar {
            update_progress_bar(bar, 1);
        }
    }
    let elapsed = start_time.elapsed();
    if let Some(ref bar) = bar {
        close_progress_bar(bar);
    }

    shutdown_pipeline_handles(supervisor_handle, task_count, report.attempted())?;
    let report = report.finish(elapsed);

    println!("\n{}", render_summary(&report));

    if report.is_partial_failure() {
        return Err(anyhow::anyhow!(
            "{} of {} files failed",
            report.failed(),
            report.attempted
        ));
    }
    Ok(())
}
