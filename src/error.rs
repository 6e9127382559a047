// Sweep error taxonomy
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{}: {source}", path.display())]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Failed to list log directory {path:?}: {source}")]
    Enumerate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to delete {} log file(s): {}", failures.len(), join_failures(failures))]
    Delete { failures: Vec<DeletionFailure> },

    #[error("Settings error: {0}")]
    Settings(String),
}

fn join_failures(failures: &[DeletionFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
