use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("failed to resolve reference '{refspec}' (is the clone deep enough?)")]
    RefNotFound { refspec: String },

    #[error("no merge base between '{base}' and '{head}'")]
    NoMergeBase { base: String, head: String },

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
