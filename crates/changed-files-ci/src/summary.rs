use std::path::PathBuf;

use crate::output::append;
use crate::{CommandError, EnvSource};

/// Buffered job summary, flushed to the file named by `GITHUB_STEP_SUMMARY`.
#[derive(Debug, Default)]
pub struct StepSummary {
    buffer: String,
}

impl StepSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    pub fn add_eol(&mut self) -> &mut Self {
        self.add_raw("\n")
    }

    /// Levels outside `1..=6` fall back to `h1`.
    pub fn add_heading(&mut self, text: &str, level: u8) -> &mut Self {
        let level = if (1..=6).contains(&level) { level } else { 1 };
        let element = wrap(&format!("h{level}"), &escape_html(text));
        self.add_raw(&element).add_eol()
    }

    /// One header row followed by the data rows.
    pub fn add_table<S: AsRef<str>>(&mut self, headers: &[&str], rows: &[Vec<S>]) -> &mut Self {
        let mut body = String::new();
        body.push_str(&wrap("tr", &cells("th", headers)));
        for row in rows {
            body.push_str(&wrap("tr", &cells("td", row)));
        }
        self.add_raw(&wrap("table", &body)).add_eol()
    }

    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Appends the buffer to the summary file and empties it. Returns the
    /// path written to, or `None` when the runner provides no summary file.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::FileWrite`] if the file cannot be written.
    pub fn write<E: EnvSource + ?Sized>(&mut self, env: &E) -> Result<Option<PathBuf>, CommandError> {
        let Some(path) = env
            .var("GITHUB_STEP_SUMMARY")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
        else {
            return Ok(None);
        };

        append(&path, &self.buffer)?;
        self.buffer.clear();
        Ok(Some(path))
    }
}

fn wrap(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

fn cells<S: AsRef<str>>(tag: &str, values: &[S]) -> String {
    values
        .iter()
        .map(|value| wrap(tag, &escape_html(value.as_ref())))
        .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
