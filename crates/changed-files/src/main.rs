mod commands;
mod environment;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use changed_files_ci::{CommandWriter, EnvSource, ProcessEnv, is_github_actions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::{Commands, DetectArgs};
use crate::environment::LogLevel;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "changed-files")]
#[command(version)]
#[command(
    about = "Detect files changed between two commits and classify them with glob filters",
    long_about = None
)]
struct Cli {
    /// Path to start repository discovery from (default: current directory)
    #[arg(long = "path", short = 'C', global = true)]
    path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let env = ProcessEnv;

    init_tracing(environment::log_level(&env, cli.verbose));

    let start_path = match resolve_start_path(cli.path) {
        Ok(path) => path,
        Err(e) => {
            report_error(&e, &env);
            return ExitCode::FAILURE;
        }
    };

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Detect(DetectArgs::default()));

    if let Err(e) = command.execute(&start_path, &env) {
        report_error(&e, &env);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn report_error<E: EnvSource>(error: &CliError, env: &E) {
    print_error(error);

    if is_github_actions(env) {
        let annotation = CommandWriter::stdout().error_with_title(&error.title(), &error.chain());
        if let Err(e) = annotation {
            eprintln!("warning: {e}");
        }
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
