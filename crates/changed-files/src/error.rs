use changed_files_ci::{CommandError, EventError, InputError};
use changed_files_filter::FilterError;
use changed_files_operations::OperationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to write step outputs")]
    Output(#[source] CommandError),

    #[error("failed to serialize output")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to read paths from stdin")]
    Stdin(#[source] std::io::Error),
}

impl CliError {
    /// Title of the `::error` annotation shown in the workflow run.
    pub fn title(&self) -> String {
        match self {
            Self::Operation(e) => e.kind().to_string(),
            _ => "changed-files".to_string(),
        }
    }

    /// The message and all of its causes on one line.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        message
    }
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        Self::Operation(err.into())
    }
}

impl From<EventError> for CliError {
    fn from(err: EventError) -> Self {
        Self::Operation(err.into())
    }
}

impl From<FilterError> for CliError {
    fn from(err: FilterError) -> Self {
        Self::Operation(err.into())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::CliError;
    use changed_files_ci::InputError;
    use changed_files_filter::FilterError;

    #[test]
    fn missing_input_is_a_configuration_error() {
        let err: CliError = InputError::Missing {
            name: "token".to_string(),
        }
        .into();

        assert_eq!(err.title(), "configuration error");
        assert!(err.chain().contains("input required and not supplied: token"));
    }

    #[test]
    fn filter_error_chain_names_the_pattern() {
        let err: CliError = FilterError::OrphanNegation {
            pattern: "!docs/**".to_string(),
        }
        .into();

        let chain = err.chain();

        assert!(chain.starts_with("invalid configuration"));
        assert!(chain.contains("!docs/**"));
    }

    #[test]
    fn io_errors_use_the_tool_name_as_title() {
        let err = CliError::Stdin(std::io::Error::other("closed"));

        assert_eq!(err.title(), "changed-files");
        assert_eq!(err.chain(), "failed to read paths from stdin: closed");
    }

    #[test]
    fn operation_error_has_source_chain() {
        let err: CliError = InputError::Missing {
            name: "token".to_string(),
        }
        .into();

        assert!(std::error::Error::source(&err).is_some());
    }
}
