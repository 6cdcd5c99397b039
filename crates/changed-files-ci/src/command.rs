use std::io::Write;

use crate::CommandError;

#[must_use]
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[must_use]
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Emits `::command key=value::message` lines understood by the runner.
pub struct CommandWriter<W> {
    out: W,
}

impl CommandWriter<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> CommandWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Properties with empty values are left out.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Stdout`] if the line cannot be written.
    pub fn issue(
        &mut self,
        command: &str,
        properties: &[(&str, &str)],
        message: &str,
    ) -> Result<(), CommandError> {
        let mut line = format!("::{command}");

        let rendered: Vec<String> = properties
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect();
        if !rendered.is_empty() {
            line.push(' ');
            line.push_str(&rendered.join(","));
        }

        line.push_str("::");
        line.push_str(&escape_data(message));

        writeln!(self.out, "{line}").map_err(CommandError::Stdout)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::Stdout`] if the line cannot be written.
    pub fn error_with_title(&mut self, title: &str, message: &str) -> Result<(), CommandError> {
        self.issue("error", &[("title", title)], message)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::Stdout`] if the line cannot be written.
    pub fn warning(&mut self, message: &str) -> Result<(), CommandError> {
        self.issue("warning", &[], message)
    }

    /// Registers a secret so the runner masks it in logs.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Stdout`] if the line cannot be written.
    pub fn add_mask(&mut self, secret: &str) -> Result<(), CommandError> {
        self.issue("add-mask", &[], secret)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::Stdout`] if the line cannot be written.
    pub fn group(&mut self, name: &str) -> Result<(), CommandError> {
        self.issue("group", &[], name)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::Stdout`] if the line cannot be written.
    pub fn end_group(&mut self) -> Result<(), CommandError> {
        self.issue("endgroup", &[], "")
    }

    /// Legacy output form, used when `GITHUB_OUTPUT` is not available.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Stdout`] if the line cannot be written.
    pub fn set_output(&mut self, name: &str, value: &str) -> Result<(), CommandError> {
        self.issue("set-output", &[("name", name)], value)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut CommandWriter<Vec<u8>>) -> Result<(), CommandError>) -> String {
        let mut writer = CommandWriter::new(Vec::new());
        f(&mut writer).expect("writing to a Vec never fails");
        String::from_utf8(writer.into_inner()).expect("commands are valid UTF-8")
    }

    #[test]
    fn escape_data_encodes_percent_and_newlines() {
        assert_eq!(escape_data("50%\r\nnext"), "50%25%0D%0Anext");
    }

    #[test]
    fn escape_property_also_encodes_colon_and_comma() {
        assert_eq!(escape_property("a:b,c%"), "a%3Ab%2Cc%25");
    }

    #[test]
    fn error_command_with_title() {
        let out = render(|w| w.error_with_title("changed-files", "boom"));
        assert_eq!(out, "::error title=changed-files::boom\n");
    }

    #[test]
    fn empty_properties_are_skipped() {
        let out = render(|w| w.issue("notice", &[("file", ""), ("line", "3")], "msg"));
        assert_eq!(out, "::notice line=3::msg\n");
    }

    #[test]
    fn multiline_messages_are_escaped() {
        let out = render(|w| w.warning("first\nsecond"));
        assert_eq!(out, "::warning::first%0Asecond\n");
    }

    #[test]
    fn group_and_end_group() {
        let out = render(|w| {
            w.group("Changed files")?;
            w.end_group()
        });
        assert_eq!(out, "::group::Changed files\n::endgroup::\n");
    }

    #[test]
    fn add_mask_passes_secret_as_message() {
        let out = render(|w| w.add_mask("s3cr3t"));
        assert_eq!(out, "::add-mask::s3cr3t\n");
    }

    #[test]
    fn legacy_set_output_escapes_property() {
        let out = render(|w| w.set_output("any-changed", "true"));
        assert_eq!(out, "::set-output name=any-changed::true\n");
    }
}
