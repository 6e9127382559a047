use crate::models::{Classification, DirectoryEntry, LogFileName, PointerLevel};

/// Classifies one directory entry against the naming convention for `prefix`.
///
/// Pointers are only recognised when the entry is a symlink; a regular file
/// that happens to be named `<prefix>.INFO` is irrelevant. Directories are
/// always irrelevant, whatever their name.
pub fn classify(entry: &DirectoryEntry, prefix: &str) -> Classification {
    if entry.is_dir() {
        return Classification::Irrelevant;
    }

    if let Some(level) = PointerLevel::from_pointer_name(&entry.name, prefix) {
        return if entry.is_symlink() {
            Classification::Pointer {
                level,
                target: entry.symlink_target.clone(),
            }
        } else {
            Classification::Irrelevant
        };
    }

    match LogFileName::parse(&entry.name, prefix) {
        Some(log) => Classification::LogCandidate(log),
        None => Classification::Irrelevant,
    }
}
