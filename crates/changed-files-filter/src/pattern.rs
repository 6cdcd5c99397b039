use crate::{FilterError, Result};

/// One non-empty line of filter text.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FilterLine<'a> {
    pub(crate) name: Option<&'a str>,
    pub(crate) patterns: Vec<&'a str>,
}

/// Returns `None` for blank lines and `#` comments.
///
/// A `name:` prefix is recognised when the name is made of letters, digits,
/// `-` and `_`. A colon followed by whitespace or the end of the line marks a
/// name, so any other text before it is an error.
pub(crate) fn parse_line(line: &str) -> Result<Option<FilterLine<'_>>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = split_name(line)?;

    Ok(Some(FilterLine {
        name,
        patterns: split_patterns(rest),
    }))
}

fn split_name(line: &str) -> Result<(Option<&str>, &str)> {
    let Some((name, rest)) = line.split_once(':') else {
        return Ok((None, line));
    };

    let name = name.trim();
    if is_filter_name(name) {
        return Ok((Some(name), rest));
    }

    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return Err(FilterError::InvalidName {
            name: name.to_string(),
        });
    }

    Ok((None, line))
}

fn is_filter_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Splits on commas that are not inside `{...}` alternations or `[...]`
/// classes, trimming each piece and dropping empty ones.
pub(crate) fn split_patterns(text: &str) -> Vec<&str> {
    let mut patterns = Vec::new();
    let mut braces = 0usize;
    let mut in_class = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '{' if !in_class => braces += 1,
            '}' if !in_class => braces = braces.saturating_sub(1),
            ',' if !in_class && braces == 0 => {
                patterns.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    patterns.push(&text[start..]);

    patterns
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
