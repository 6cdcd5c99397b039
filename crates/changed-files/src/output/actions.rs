use changed_files_ci::{CommandWriter, EnvSource, OutputChannel, StepSummary};
use changed_files_operations::operations::DetectOutput;
use changed_files_operations::output_names::{
    ADDED_FILES, ANY_CHANGED, BASE_SHA, CHANGED_FILES, DELETED_FILES, HEAD_SHA, MODIFIED_FILES,
    RENAMED_FILES,
};
use tracing::{debug, info, warn};

use crate::error::{CliError, Result};

/// Step outputs in the order they are written.
pub(crate) fn step_outputs(result: &DetectOutput) -> Result<Vec<(String, String)>> {
    let files = &result.files;
    let mut outputs = vec![
        (
            CHANGED_FILES.to_string(),
            serde_json::to_string(&result.matches)?,
        ),
        (ANY_CHANGED.to_string(), result.any_changed().to_string()),
    ];

    outputs.extend(
        result
            .named_filters
            .iter()
            .map(|(name, matched)| (name.clone(), matched.to_string())),
    );

    outputs.extend([
        (ADDED_FILES.to_string(), serde_json::to_string(&files.added)?),
        (
            MODIFIED_FILES.to_string(),
            serde_json::to_string(&files.modified)?,
        ),
        (
            DELETED_FILES.to_string(),
            serde_json::to_string(&files.deleted)?,
        ),
        (
            RENAMED_FILES.to_string(),
            serde_json::to_string(&files.renamed)?,
        ),
        (BASE_SHA.to_string(), result.refs.base.sha().to_string()),
        (HEAD_SHA.to_string(), result.refs.head.clone()),
    ]);

    Ok(outputs)
}

pub(crate) fn summary(result: &DetectOutput) -> StepSummary {
    let files = &result.files;
    let renamed: Vec<String> = files
        .renamed
        .iter()
        .map(|r| format!("{} → {}", r.old, r.new))
        .collect();

    let mut summary = StepSummary::new();
    summary.add_heading("Changed Files Summary", 2);

    let categories = [
        ("Added Files", &files.added),
        ("Modified Files", &files.modified),
        ("Deleted Files", &files.deleted),
        ("Renamed Files", &renamed),
    ];
    for (title, paths) in categories {
        if paths.is_empty() {
            continue;
        }
        let rows: Vec<Vec<&str>> = paths.iter().map(|p| vec![p.as_str()]).collect();
        summary.add_heading(title, 3).add_table(&["File Path"], &rows);
    }

    if files.is_empty() {
        summary.add_raw("No changed files matched the filters.").add_eol();
    }
    summary
}

/// Writes step outputs and the job summary. A summary that cannot be
/// written only raises a `::warning`.
pub(crate) fn publish<E: EnvSource>(result: &DetectOutput, env: &E) -> Result<()> {
    let channel = OutputChannel::from_env(env);
    let outputs = step_outputs(result)?;
    channel.set_outputs(&outputs).map_err(CliError::Output)?;
    debug!(count = outputs.len(), "wrote step outputs");

    match summary(result).write(env) {
        Ok(Some(path)) => info!(path = %path.display(), "wrote step summary"),
        Ok(None) => debug!("no step summary file configured"),
        Err(e) => {
            warn!(error = %e, "could not write step summary");
            let message = format!("could not write step summary: {e}");
            let annotation = CommandWriter::stdout().warning(&message);
            if let Err(e) = annotation {
                debug!(error = %e, "could not emit warning annotation");
            }
        }
    }
    Ok(())
}
