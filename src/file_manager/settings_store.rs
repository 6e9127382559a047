use crate::error::SweepError;
use crate::file_manager::{initialize_json_file, read_json_file_or_default, write_json_file};
use crate::models::Settings;
use log::info;
use std::path::Path;

pub fn load_settings(path: &Path) -> Result<Settings, SweepError> {
    read_json_file_or_default(path).map_err(SweepError::Settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SweepError> {
    write_json_file(path, settings).map_err(SweepError::Settings)
}

/// Writes the default settings file on first run so it can be edited later.
pub fn initialize_settings(path: &Path) -> Result<(), SweepError> {
    if initialize_json_file(path, &Settings::default()).map_err(SweepError::Settings)? {
        info!("Initialized settings file: {:?}", path);
    }
    Ok(())
}
