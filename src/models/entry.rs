// Directory enumeration records

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Symlink,
    Dir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Final path component of the link target; `None` for non-links and broken links.
    pub symlink_target: Option<String>,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            symlink_target: None,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            symlink_target: None,
        }
    }

    pub fn symlink(name: impl Into<String>, target: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Symlink,
            symlink_target: target,
        }
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}
