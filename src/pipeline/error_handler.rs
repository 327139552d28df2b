use anyhow::Result;

/// Check the drained stream against what was dispatched. Call after joining the supervisor.
///
/// A panicked worker loses the task it was holding, so the set would be incomplete; that is an
/// error for the whole batch rather than a per-file failure.
pub fn check_for_lost_results(
    panicked_workers: usize,
    dispatched: usize,
    received: usize,
) -> Result<()> {
    if panicked_workers > 0 {
        return Err(anyhow::anyhow!(
            "{} hash worker(s) panicked; received {} of {} results",
            panicked_workers,
            received,
            dispatched
        ));
    }
    if received != dispatched {
        return Err(anyhow::anyhow!(
            "result stream closed early: received {} of {} results",
            received,
            dispatched
        ));
    }
    Ok(())
}
