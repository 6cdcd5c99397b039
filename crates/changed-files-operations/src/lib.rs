mod error;
pub mod operations;
pub mod providers;
pub mod traits;
mod types;

#[cfg(test)]
pub mod mocks;

pub use error::{ConfigError, ErrorKind, OperationError, ResolutionError, Result};
pub use types::{ChangedFiles, RenamedFile, output_names};
