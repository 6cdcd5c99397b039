use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{CommandError, CommandWriter, EnvSource};

/// Formats one `name<<delimiter` record of a file command.
///
/// # Errors
///
/// Returns an error if the name or the value contains the delimiter.
pub fn format_key_value(name: &str, value: &str, delimiter: &str) -> Result<String, CommandError> {
    if name.contains(delimiter) {
        return Err(CommandError::DelimiterInName {
            name: name.to_string(),
        });
    }
    if value.contains(delimiter) {
        return Err(CommandError::DelimiterInValue {
            name: name.to_string(),
        });
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Where step outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputChannel {
    /// The file named by `GITHUB_OUTPUT`.
    File(PathBuf),
    /// `::set-output` commands on stdout.
    Stdout,
}

impl OutputChannel {
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        env.var("GITHUB_OUTPUT")
            .filter(|path| !path.is_empty())
            .map_or(Self::Stdout, |path| Self::File(PathBuf::from(path)))
    }

    /// Writes every output in order. For the output file all records are
    /// formatted before anything is appended, so a failure leaves the file
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the outputs cannot be written, or if a name or
    /// value collides with the generated delimiter.
    pub fn set_outputs<N, V>(&self, outputs: &[(N, V)]) -> Result<(), CommandError>
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        match self {
            Self::File(path) => {
                let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
                write_records(path, outputs, &delimiter)
            }
            Self::Stdout => {
                let mut writer = CommandWriter::stdout();
                for (name, value) in outputs {
                    writer.set_output(name.as_ref(), value.as_ref())?;
                }
                Ok(())
            }
        }
    }
}

fn write_records<N, V>(
    path: &Path,
    outputs: &[(N, V)],
    delimiter: &str,
) -> Result<(), CommandError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let records = outputs
        .iter()
        .map(|(name, value)| format_key_value(name.as_ref(), value.as_ref(), delimiter))
        .collect::<Result<String, _>>()?;
    append(path, &records)
}

pub(crate) fn append(path: &Path, text: &str) -> Result<(), CommandError> {
    let to_error = |source| CommandError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;
    file.write_all(text.as_bytes()).map_err(to_error)
}
