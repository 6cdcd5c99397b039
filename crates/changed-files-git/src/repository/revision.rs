use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Resolves any revision expression to the full id of the commit it
    /// points at.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the reference does not name a commit.
    pub fn resolve_commit(&self, refspec: &str) -> Result<String> {
        Ok(self.find_commit(refspec)?.id().to_string())
    }

    /// Returns the first parent of the commit, or `None` for a root commit.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the reference does not name a commit.
    pub fn parent_commit(&self, refspec: &str) -> Result<Option<String>> {
        let commit = self.find_commit(refspec)?;
        Ok(commit.parent_ids().next().map(|id| id.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either reference cannot be resolved and
    /// [`GitError::NoMergeBase`] if the two commits share no history.
    pub fn merge_base(&self, base: &str, head: &str) -> Result<String> {
        let base_id = self.find_commit(base)?.id();
        let head_id = self.find_commit(head)?.id();

        match self.inner.merge_base(base_id, head_id) {
            Ok(oid) => Ok(oid.to_string()),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Err(GitError::NoMergeBase {
                base: base.to_string(),
                head: head.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn find_commit(&self, refspec: &str) -> Result<git2::Commit<'_>> {
        let not_found = || GitError::RefNotFound {
            refspec: refspec.to_string(),
        };

        self.inner
            .revparse_single(refspec)
            .map_err(|_| not_found())?
            .peel_to_commit()
            .map_err(|_| not_found())
    }
}
