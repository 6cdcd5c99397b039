use changed_files_operations::operations::DetectOutput;

use super::OutputFormatter;
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_section(output: &mut String, title: &str, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        output.push_str(&format!("\n{title}:\n"));
        for entry in entries {
            output.push_str(&format!("  {entry}\n"));
        }
    }

    fn format_files(output: &mut String, result: &DetectOutput) {
        let files = &result.files;
        if files.is_empty() {
            output.push_str("\nNo changed files matched the filters\n");
            return;
        }

        Self::format_section(output, "Added", &files.added);
        Self::format_section(output, "Modified", &files.modified);
        Self::format_section(output, "Deleted", &files.deleted);

        let renamed: Vec<String> = files
            .renamed
            .iter()
            .map(|r| format!("{} -> {}", r.old, r.new))
            .collect();
        Self::format_section(output, "Renamed", &renamed);
    }

    fn format_filters(output: &mut String, result: &DetectOutput) {
        if result.matches.is_empty() {
            return;
        }

        output.push_str("\nFilters:\n");
        for (filter, paths) in result.matches.iter() {
            output.push_str(&format!("  {filter} ({})\n", paths.len()));
            for path in paths {
                output.push_str(&format!("    {path}\n"));
            }
        }
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format(&self, result: &DetectOutput) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "Comparing {}...{} ({} file(s) changed)\n",
            short_sha(result.refs.base.sha()),
            short_sha(&result.refs.head),
            result.changes.len()
        ));

        Self::format_files(&mut output, result);
        Self::format_filters(&mut output, result);

        output.push_str(&format!("\nany-changed: {}\n", result.any_changed()));
        Ok(output)
    }
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}
