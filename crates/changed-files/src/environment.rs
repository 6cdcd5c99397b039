use changed_files_ci::{EnvSource, is_debug, is_github_actions};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// `RUST_LOG` is handled by the subscriber itself and wins over this.
pub fn log_level<E: EnvSource>(env: &E, verbose: bool) -> LogLevel {
    if verbose || is_debug(env) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Step outputs and a job summary for the Actions runner
    Actions,
    /// Human-readable listing on stdout
    Plain,
    /// The detection result as JSON on stdout
    Json,
}

/// Actions output inside a workflow run, plain text anywhere else.
pub fn default_format<E: EnvSource>(env: &E) -> OutputFormat {
    let has_output_file = env.var("GITHUB_OUTPUT").is_some_and(|p| !p.is_empty());

    if is_github_actions(env) || has_output_file {
        OutputFormat::Actions
    } else {
        OutputFormat::Plain
    }
}
