use crate::models::Settings;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Overrides `Settings::log_dir` when set.
pub const LOG_DIR_ENV: &str = "LOGSWEEP_LOG_DIR";

static APP_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

pub fn get_app_config_dir() -> PathBuf {
    APP_CONFIG_DIR
        .get_or_init(|| {
            let base_dir = dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."));
            base_dir.join("logsweep")
        })
        .clone()
}

pub fn get_settings_json_path() -> PathBuf {
    get_app_config_dir().join("settings.json")
}

/// Directory to sweep, or `None` when sweeping is disabled.
pub fn resolve_log_directory(settings: &Settings) -> Option<PathBuf> {
    pick_log_directory(env::var(LOG_DIR_ENV).ok(), settings)
}

pub(crate) fn pick_log_directory(env_value: Option<String>, settings: &Settings) -> Option<PathBuf> {
    env_value
        .or_else(|| settings.log_dir.clone())
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
}
