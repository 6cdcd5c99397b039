mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{FileChange, FileStatus};

pub type Result<T> = std::result::Result<T, GitError>;

/// Well-known id of the empty tree, usable wherever git accepts a tree-ish.
pub const EMPTY_TREE_SHA: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
