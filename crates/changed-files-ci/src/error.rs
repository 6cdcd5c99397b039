use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input required and not supplied: {name}")]
    Missing { name: String },
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to read event payload '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to write to '{path}'")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write workflow command")]
    Stdout(#[source] std::io::Error),

    #[error("output name '{name}' contains the delimiter")]
    DelimiterInName { name: String },

    #[error("value of output '{name}' contains the delimiter")]
    DelimiterInValue { name: String },
}
