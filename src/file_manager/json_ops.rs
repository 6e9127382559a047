// JSON settings persistence

use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref FILE_LOCK: Mutex<()> = Mutex::new(());
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let _lock = FILE_LOCK.lock().map_err(|e| format!("Lock error: {}", e))?;

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;

    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse JSON from {:?}: {}", path, e))
}

/// Writes pretty JSON next to `path` and renames it into place, so readers
/// never observe a half-written settings file.
pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), String> {
    let mut bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| format!("Failed to encode settings for {:?}: {}", path, e))?;
    bytes.push(b'\n');

    let _lock = FILE_LOCK.lock().map_err(|e| format!("Lock error: {}", e))?;
    replace_file(path, &bytes)
        .map_err(|e| format!("Failed to store settings at {:?}: {}", path, e))
}

fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    let mut file = File::create(&staging)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&staging, path)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

pub fn initialize_json_file<T: Serialize>(path: &Path, default: &T) -> Result<bool, String> {
    if path.exists() {
        return Ok(false);
    }
    write_json_file(path, default)?;
    Ok(true)
}

pub fn read_json_file_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, String> {
    if path.exists() {
        read_json_file(path)
    } else {
        Ok(T::default())
    }
}
