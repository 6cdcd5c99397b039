use changed_files_git::{FileChange, FileStatus};
use serde::Serialize;

/// Names of the fixed step outputs. Named filters may not reuse them.
pub mod output_names {
    pub const CHANGED_FILES: &str = "changed-files";
    pub const ANY_CHANGED: &str = "any-changed";
    pub const ADDED_FILES: &str = "added-files";
    pub const MODIFIED_FILES: &str = "modified-files";
    pub const DELETED_FILES: &str = "deleted-files";
    pub const RENAMED_FILES: &str = "renamed-files";
    pub const BASE_SHA: &str = "base-sha";
    pub const HEAD_SHA: &str = "head-sha";

    pub const RESERVED: &[&str] = &[
        CHANGED_FILES,
        ANY_CHANGED,
        ADDED_FILES,
        MODIFIED_FILES,
        DELETED_FILES,
        RENAMED_FILES,
        BASE_SHA,
        HEAD_SHA,
    ];

    #[must_use]
    pub fn is_reserved(name: &str) -> bool {
        RESERVED.contains(&name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedFile {
    pub old: String,
    pub new: String,
}

/// Changed paths grouped by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangedFiles {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    pub renamed: Vec<RenamedFile>,
}

impl ChangedFiles {
    pub fn push(&mut self, change: &FileChange) {
        let path = change.path_str();
        match (change.status, change.old_path_str()) {
            (FileStatus::Added, _) => self.added.push(path),
            (FileStatus::Modified, _) => self.modified.push(path),
            (FileStatus::Deleted, _) => self.deleted.push(path),
            (FileStatus::Renamed, Some(old)) => self.renamed.push(RenamedFile { old, new: path }),
            // A rename without its source cannot be paired; report the new side.
            (FileStatus::Renamed, None) => self.added.push(path),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.modified.is_empty()
            && self.deleted.is_empty()
            && self.renamed.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len() + self.renamed.len()
    }
}
