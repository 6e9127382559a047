// Settings data models
use serde::{Deserialize, Serialize};

pub const DEFAULT_RETENTION_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the rotated logs. Unset or empty disables the sweep.
    #[serde(default)]
    pub log_dir: Option<String>,
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,
}

fn default_max_age_days() -> u32 {
    DEFAULT_RETENTION_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_dir: None,
            max_age_days: DEFAULT_RETENTION_DAYS,
        }
    }
}
