//! Log retention for glog-style rotated files.
//! Removes `<prefix>.<host>.<app>.log.<LEVEL>.<timestamp>.<pid>` files past the
//! retention window, keeping whatever the `<prefix>.INFO|WARN|ERROR` links point at.

pub mod classify;
pub mod sweeper;

pub use classify::classify;
pub use sweeper::{plan_sweep, FsLogDirectory, LogDirectory, RetentionSweeper};

use crate::error::SweepError;
use crate::models::{Settings, SweepReport};
use crate::utils::{resolve_log_directory, resolve_service_prefix};
use log::{info, warn};
use std::path::PathBuf;

/// Sweeps the configured log directory for the running program.
pub fn cleanup_logs(settings: &Settings) -> Result<SweepReport, SweepError> {
    cleanup_logs_with(
        || resolve_log_directory(settings),
        resolve_service_prefix,
        settings.max_age_days,
    )
}

pub fn cleanup_logs_with<D, P>(
    resolve_dir: D,
    resolve_prefix: P,
    max_age_days: u32,
) -> Result<SweepReport, SweepError>
where
    D: FnOnce() -> Option<PathBuf>,
    P: FnOnce() -> String,
{
    let Some(logs_dir) = resolve_dir() else {
        return Ok(SweepReport::default());
    };

    let prefix = resolve_prefix();
    let result = RetentionSweeper::new().sweep(&logs_dir, &prefix, max_age_days);

    match &result {
        Ok(report) if !report.deleted.is_empty() => info!(
            "Cleaned up {} old log(s) for {} in {:?}",
            report.deleted.len(),
            prefix,
            logs_dir
        ),
        Ok(_) => {}
        Err(e) => warn!("Log cleanup for {} in {:?} failed: {}", prefix, logs_dir, e),
    }

    result
}
