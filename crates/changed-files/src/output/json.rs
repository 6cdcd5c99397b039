use changed_files_operations::operations::DetectOutput;
use changed_files_operations::output_names::{
    ADDED_FILES, ANY_CHANGED, BASE_SHA, CHANGED_FILES, DELETED_FILES, HEAD_SHA, MODIFIED_FILES,
    RENAMED_FILES,
};
use serde_json::json;

use super::OutputFormatter;
use crate::error::Result;

/// The step outputs as one JSON document, with named filters under `filters`.
pub(crate) struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &DetectOutput) -> Result<String> {
        let files = &result.files;
        let report = json!({
            (BASE_SHA): result.refs.base.sha(),
            (HEAD_SHA): result.refs.head,
            (ANY_CHANGED): result.any_changed(),
            (CHANGED_FILES): result.matches,
            (ADDED_FILES): files.added,
            (MODIFIED_FILES): files.modified,
            (DELETED_FILES): files.deleted,
            (RENAMED_FILES): files.renamed,
            "filters": result.named_filters,
        });
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
