use std::fmt;

use changed_files_ci::{EventError, InputError};
use changed_files_filter::FilterError;
use changed_files_git::GitError;
use thiserror::Error;

/// The comparison range could not be determined or diffed.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("no {input} given and no event context to infer it from")]
    MissingReference { input: &'static str },

    #[error("cannot infer references for event '{name}'; set base-sha and head-sha")]
    UnsupportedEvent { name: String },

    #[error("'{event}' event payload has no pull_request object")]
    MissingPullRequest { event: String },

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Git(#[from] GitError),
}

/// The action was configured incorrectly.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid filters")]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("filter name '{name}' collides with a built-in output")]
    ReservedFilterName { name: String },
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("failed to resolve changed files")]
    Resolution(#[from] ResolutionError),

    #[error("invalid configuration")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Resolution,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution => f.write_str("resolution error"),
            Self::Config => f.write_str("configuration error"),
        }
    }
}

impl OperationError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Resolution(_) => ErrorKind::Resolution,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<GitError> for OperationError {
    fn from(err: GitError) -> Self {
        Self::Resolution(err.into())
    }
}

impl From<EventError> for OperationError {
    fn from(err: EventError) -> Self {
        Self::Resolution(err.into())
    }
}

impl From<FilterError> for OperationError {
    fn from(err: FilterError) -> Self {
        Self::Config(err.into())
    }
}

impl From<InputError> for OperationError {
    fn from(err: InputError) -> Self {
        Self::Config(err.into())
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
