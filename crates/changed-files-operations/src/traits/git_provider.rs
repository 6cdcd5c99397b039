use std::path::Path;

use changed_files_git::FileChange;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the reference
    /// does not name a commit.
    fn resolve_commit(&self, repo_path: &Path, refspec: &str) -> Result<String>;

    /// First parent of `commit`, or `None` for a root commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the commit is unknown.
    fn parent_commit(&self, repo_path: &Path, commit: &str) -> Result<Option<String>>;

    /// Changes on `head` since its merge base with `base`; against the empty
    /// tree when `base` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened, the histories
    /// share no merge base, or the diff fails.
    fn changed_files(
        &self,
        repo_path: &Path,
        base: Option<&str>,
        head: &str,
    ) -> Result<Vec<FileChange>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    fn is_shallow(&self, repo_path: &Path) -> Result<bool>;
}
