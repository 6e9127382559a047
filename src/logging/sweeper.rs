use crate::error::{DeletionFailure, SweepError};
use crate::logging::classify::classify;
use crate::models::{
    CandidateDecision, Classification, DirectoryEntry, KeepReason, RetentionDecision, SweepPlan,
    SweepReport,
};
use chrono::{DateTime, Duration, Local};
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem access used by the sweep.
pub trait LogDirectory {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>>;

    /// Removing a file that is already gone counts as success.
    fn delete_file(&self, path: &Path) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsLogDirectory;

impl LogDirectory for FsLogDirectory {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                // Non UTF-8 names can never match the convention.
                Err(_) => continue,
            };
            if let Some(record) = entry_record(name, &entry.path(), entry.file_type())? {
                entries.push(record);
            }
        }

        Ok(entries)
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// An entry removed between `readdir` and `lstat` is skipped; any other
/// failure aborts the listing.
fn entry_record(
    name: String,
    path: &Path,
    file_type: io::Result<fs::FileType>,
) -> io::Result<Option<DirectoryEntry>> {
    let file_type = match file_type {
        Ok(file_type) => file_type,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let record = if file_type.is_symlink() {
        DirectoryEntry::symlink(name, resolve_link_target(path))
    } else if file_type.is_dir() {
        DirectoryEntry::dir(name)
    } else {
        DirectoryEntry::file(name)
    };
    Ok(Some(record))
}

/// One hop: read the link, keep only its final component, and require that
/// the link currently resolves to something.
fn resolve_link_target(link: &Path) -> Option<String> {
    let target = fs::read_link(link).ok()?;
    fs::metadata(link).ok()?;
    target
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

/// Decides what to do with every entry, without touching the filesystem.
pub fn plan_sweep(
    entries: &[DirectoryEntry],
    prefix: &str,
    max_age_days: u32,
    now: DateTime<Local>,
) -> SweepPlan {
    let mut protected = BTreeSet::new();
    let mut logs = Vec::new();
    let mut irrelevant = 0;

    for entry in entries {
        match classify(entry, prefix) {
            Classification::Pointer { target, .. } => {
                if let Some(target) = target {
                    protected.insert(target);
                }
            }
            Classification::LogCandidate(log) => logs.push((entry.name.clone(), log)),
            Classification::Irrelevant => irrelevant += 1,
        }
    }

    let max_age = Duration::days(i64::from(max_age_days));
    let candidates = logs
        .into_iter()
        .map(|(name, log)| {
            let decision = if protected.contains(&name) {
                RetentionDecision::Keep(KeepReason::Protected)
            } else if max_age_days == 0 || now.signed_duration_since(log.timestamp) > max_age {
                RetentionDecision::Delete
            } else {
                RetentionDecision::Keep(KeepReason::WithinRetention)
            };
            CandidateDecision { name, log, decision }
        })
        .collect();

    SweepPlan {
        protected,
        candidates,
        irrelevant,
    }
}

/// Deletes rotated log files older than the retention window.
pub struct RetentionSweeper<D: LogDirectory = FsLogDirectory> {
    directory: D,
}

impl RetentionSweeper<FsLogDirectory> {
    pub fn new() -> Self {
        Self::with_directory(FsLogDirectory)
    }
}

impl Default for RetentionSweeper<FsLogDirectory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: LogDirectory> RetentionSweeper<D> {
    pub fn with_directory(directory: D) -> Self {
        Self { directory }
    }

    pub fn sweep(
        &self,
        dir: &Path,
        prefix: &str,
        max_age_days: u32,
    ) -> Result<SweepReport, SweepError> {
        self.sweep_at(dir, prefix, max_age_days, Local::now())
    }

    pub fn sweep_at(
        &self,
        dir: &Path,
        prefix: &str,
        max_age_days: u32,
        now: DateTime<Local>,
    ) -> Result<SweepReport, SweepError> {
        let entries = match self.directory.list_entries(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Log directory {:?} does not exist, nothing to sweep", dir);
                return Ok(SweepReport::default());
            }
            Err(source) => {
                return Err(SweepError::Enumerate {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        let plan = plan_sweep(&entries, prefix, max_age_days, now);
        let mut report = SweepReport {
            ignored: plan.irrelevant,
            ..SweepReport::default()
        };
        let mut failures = Vec::new();

        for candidate in &plan.candidates {
            match candidate.decision {
                RetentionDecision::Keep(KeepReason::Protected) => {
                    debug!("Keeping active log: {}", candidate.name);
                    report.protected += 1;
                }
                RetentionDecision::Keep(KeepReason::WithinRetention) => report.retained += 1,
                RetentionDecision::Delete => {
                    let path: PathBuf = dir.join(&candidate.name);
                    match self.directory.delete_file(&path) {
                        Ok(()) => {
                            debug!("Deleted old log: {}", candidate.name);
                            report.deleted.push(candidate.name.clone());
                        }
                        Err(source) => failures.push(DeletionFailure { path, source }),
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(SweepError::Delete { failures })
        }
    }
}
