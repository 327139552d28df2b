//! Sumpool CLI: hash files concurrently; exits non-zero when any file fails.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use sumpool::engine::arg_parser::Cli;
use sumpool::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
