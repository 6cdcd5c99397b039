use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use changed_files_git::{FileChange, GitError};

use crate::Result;
use crate::traits::GitProvider;

/// A diff request as seen by [`MockGitProvider::changed_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffCall {
    pub base: Option<String>,
    pub head: String,
}

pub struct MockGitProvider {
    commits: HashMap<String, String>,
    parents: HashMap<String, String>,
    changed_files: Vec<FileChange>,
    shallow: bool,
    diff_calls: Mutex<Vec<DiffCall>>,
    shallow_checks: Mutex<usize>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            commits: HashMap::new(),
            parents: HashMap::new(),
            changed_files: Vec::new(),
            shallow: false,
            diff_calls: Mutex::new(Vec::new()),
            shallow_checks: Mutex::new(0),
        }
    }

    /// Makes `refspec` resolve to `sha`. A sha always resolves to itself.
    #[must_use]
    pub fn with_commit(mut self, refspec: &str, sha: &str) -> Self {
        self.commits.insert(refspec.to_string(), sha.to_string());
        self.commits.insert(sha.to_string(), sha.to_string());
        self
    }

    #[must_use]
    pub fn with_parent(mut self, commit: &str, parent: &str) -> Self {
        self.parents.insert(commit.to_string(), parent.to_string());
        self
    }

    #[must_use]
    pub fn with_changed_files(mut self, files: Vec<FileChange>) -> Self {
        self.changed_files = files;
        self
    }

    #[must_use]
    pub fn shallow(mut self, shallow: bool) -> Self {
        self.shallow = shallow;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn diff_calls(&self) -> Vec<DiffCall> {
        self.diff_calls.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn shallow_checks(&self) -> usize {
        *self.shallow_checks.lock().expect("lock poisoned")
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn resolve_commit(&self, _repo_path: &Path, refspec: &str) -> Result<String> {
        self.commits.get(refspec).cloned().ok_or_else(|| {
            GitError::RefNotFound {
                refspec: refspec.to_string(),
            }
            .into()
        })
    }

    fn parent_commit(&self, _repo_path: &Path, commit: &str) -> Result<Option<String>> {
        Ok(self.parents.get(commit).cloned())
    }

    fn changed_files(
        &self,
        _repo_path: &Path,
        base: Option<&str>,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        self.diff_calls
            .lock()
            .expect("lock poisoned")
            .push(DiffCall {
                base: base.map(str::to_string),
                head: head.to_string(),
            });
        Ok(self.changed_files.clone())
    }

    fn is_shallow(&self, _repo_path: &Path) -> Result<bool> {
        *self.shallow_checks.lock().expect("lock poisoned") += 1;
        Ok(self.shallow)
    }
}
