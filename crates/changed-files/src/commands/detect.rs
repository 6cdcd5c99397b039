use std::path::Path;

use changed_files_ci::{CommandWriter, EnvSource, EventContext, InputOptions, Inputs};
use changed_files_operations::operations::{DetectInput, DetectOperation};
use changed_files_operations::providers::Git2Provider;
use tracing::{debug, info};

use super::DetectArgs;
use crate::environment::{self, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::{self, JsonFormatter, OutputFormatter, PlainTextFormatter};

pub(crate) fn run<E: EnvSource>(args: DetectArgs, start_path: &Path, env: &E) -> Result<()> {
    let format = args
        .format
        .unwrap_or_else(|| environment::default_format(env));
    let inputs = Inputs::new(env);

    if format == OutputFormat::Actions {
        let token = inputs.required("token")?;
        CommandWriter::stdout()
            .add_mask(&token)
            .map_err(CliError::Output)?;
    }

    let filters = if args.filters.is_empty() {
        inputs.multiline("filters", InputOptions::OPTIONAL)?
    } else {
        args.filters
    };
    let base = args.base.or_else(|| inputs.optional("base-sha"));
    let head = args.head.or_else(|| inputs.optional("head-sha"));

    info!(?filters, "filters");
    match &base {
        Some(base) => info!(%base, "base reference"),
        None => info!("no base reference given, inferring from event"),
    }
    match &head {
        Some(head) => info!(%head, "head reference"),
        None => info!("no head reference given, inferring from event"),
    }

    let event = if base.is_some() && head.is_some() {
        None
    } else {
        EventContext::from_env(env)?
    };
    if let Some(event) = &event {
        debug!(event = %event.name, "loaded event context");
    }

    let operation = DetectOperation::new(Git2Provider::new());
    let input = DetectInput {
        base,
        head,
        filters,
        event,
    };
    let result = operation.execute(start_path, &input)?;

    match format {
        OutputFormat::Actions => {
            let mut commands = CommandWriter::stdout();
            commands.group("Changed files").map_err(CliError::Output)?;
            print!("{}", PlainTextFormatter.format(&result)?);
            commands.end_group().map_err(CliError::Output)?;
            output::publish(&result, env)
        }
        OutputFormat::Plain => {
            print!("{}", PlainTextFormatter.format(&result)?);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter.format(&result)?);
            Ok(())
        }
    }
}
