//! The GitHub Actions side of changed-files: reading inputs and the event
//! payload from the environment, and writing outputs, workflow commands and
//! the step summary back to the runner.

mod command;
mod env;
mod error;
mod event;
mod inputs;
mod output;
mod summary;

pub use command::{CommandWriter, escape_data, escape_property};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{CommandError, EventError, InputError};
pub use event::{CommitRef, EventContext, EventPayload, PullRequest, is_null_sha};
pub use inputs::{InputOptions, Inputs, input_env_name};
pub use output::{OutputChannel, format_key_value};
pub use summary::StepSummary;

/// `true` when running inside a GitHub Actions job.
pub fn is_github_actions<E: EnvSource + ?Sized>(env: &E) -> bool {
    env.var("GITHUB_ACTIONS").as_deref() == Some("true")
}

/// `true` when step debug logging is enabled for the job.
pub fn is_debug<E: EnvSource + ?Sized>(env: &E) -> bool {
    env.var("RUNNER_DEBUG").as_deref() == Some("1")
}
