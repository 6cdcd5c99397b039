use std::path::Path;

use changed_files_git::{FileChange, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn resolve_commit(&self, repo_path: &Path, refspec: &str) -> Result<String> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.resolve_commit(refspec)?)
    }

    fn parent_commit(&self, repo_path: &Path, commit: &str) -> Result<Option<String>> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.parent_commit(commit)?)
    }

    fn changed_files(
        &self,
        repo_path: &Path,
        base: Option<&str>,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        let repo = Repository::open(repo_path)?;
        let changes = match base {
            Some(base) => repo.changed_files_since_merge_base(base, head)?,
            None => repo.changed_files(None, head)?,
        };
        Ok(changes)
    }

    fn is_shallow(&self, repo_path: &Path) -> Result<bool> {
        let repo = Repository::open(repo_path)?;
        Ok(repo.is_shallow())
    }
}
