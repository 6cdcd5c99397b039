mod detect;
mod matching;

use std::path::Path;

use changed_files_ci::EnvSource;
use clap::{Args, Subcommand};

use crate::environment::OutputFormat;
use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Detect changed files and report them (default)
    Detect(DetectArgs),
    /// Match newline-separated paths from stdin against filters
    Match(MatchArgs),
}

#[derive(Args, Default)]
pub(crate) struct DetectArgs {
    /// Base commit or reference (overrides the `base-sha` input)
    #[arg(long)]
    pub base: Option<String>,

    /// Head commit or reference (overrides the `head-sha` input)
    #[arg(long)]
    pub head: Option<String>,

    /// Filter line, e.g. `src/**/*.rs` or `docs: docs/**, *.md` (repeatable;
    /// overrides the `filters` input)
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,

    /// Output format (default: actions inside a workflow run, plain otherwise)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub(crate) struct MatchArgs {
    /// Filter line (repeatable; default: every path)
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,
}

impl Commands {
    pub(crate) fn execute<E: EnvSource>(self, start_path: &Path, env: &E) -> Result<()> {
        match self {
            Self::Detect(args) => detect::run(args, start_path, env),
            Self::Match(args) => matching::run(args),
        }
    }
}
