mod error;
mod file_manager;
mod logging;
mod models;
mod utils;

pub use error::{DeletionFailure, SweepError};
pub use file_manager::{initialize_settings, load_settings, save_settings};
pub use logging::{
    classify, cleanup_logs, cleanup_logs_with, plan_sweep, FsLogDirectory, LogDirectory,
    RetentionSweeper,
};
pub use models::{
    CandidateDecision, Classification, DirectoryEntry, EntryKind, KeepReason, LogFileName,
    LogLevel, PointerLevel, RetentionDecision, Settings, SweepPlan, SweepReport,
    DEFAULT_RETENTION_DAYS,
};
pub use utils::{
    get_settings_json_path, program_name, resolve_log_directory, resolve_service_prefix,
    LOG_DIR_ENV,
};

use log::{error, info};

fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Loads settings and runs one sweep. Failures are logged, never fatal.
pub fn run() {
    init_logger();

    let settings_path = get_settings_json_path();
    if let Err(e) = initialize_settings(&settings_path) {
        error!("{}", e);
    }

    let settings = match load_settings(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}, using defaults", e);
            Settings::default()
        }
    };

    match cleanup_logs(&settings) {
        Ok(report) => info!(
            "Log sweep finished: {} deleted, {} retained, {} active",
            report.deleted.len(),
            report.retained,
            report.protected
        ),
        Err(e) => error!("Log sweep failed: {}", e),
    }
}
