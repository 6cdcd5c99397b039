use std::io::BufRead;

use changed_files_operations::operations::build_filters;
use changed_files_operations::output_names;
use serde_json::json;

use super::MatchArgs;
use crate::error::{CliError, Result};

pub(crate) fn run(args: MatchArgs) -> Result<()> {
    let filters = build_filters(&args.filters)?;
    let paths = read_paths(std::io::stdin().lock())?;

    let result = filters.match_paths(&paths);
    let any_changed = result.any_changed();
    let report = json!({
        (output_names::CHANGED_FILES): result,
        (output_names::ANY_CHANGED): any_changed,
    });

    let text = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{text}");
    Ok(())
}

fn read_paths<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(CliError::Stdin)?;
        let path = line.trim();
        if !path.is_empty() {
            paths.push(path.to_string());
        }
    }
    Ok(paths)
}
