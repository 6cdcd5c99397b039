use crate::{EnvSource, InputError};

/// Environment variable holding an action input, with spaces and hyphens
/// mapped to `_` (`base-sha` -> `INPUT_BASE_SHA`).
#[must_use]
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace([' ', '-'], "_").to_uppercase())
}

/// The runner itself only maps spaces, so `base-sha` arrives as
/// `INPUT_BASE-SHA`. Both spellings are accepted.
fn runner_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    pub required: bool,
    pub trim_whitespace: bool,
}

impl InputOptions {
    pub const OPTIONAL: Self = Self {
        required: false,
        trim_whitespace: true,
    };

    pub const REQUIRED: Self = Self {
        required: true,
        trim_whitespace: true,
    };
}

impl Default for InputOptions {
    fn default() -> Self {
        Self::OPTIONAL
    }
}

pub struct Inputs<E> {
    env: E,
}

impl<E: EnvSource> Inputs<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Looks an input up. Empty values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Missing`] if the input is required and absent.
    pub fn get(&self, name: &str, options: InputOptions) -> Result<Option<String>, InputError> {
        let raw = self
            .env
            .var(&runner_env_name(name))
            .filter(|v| !v.is_empty())
            .or_else(|| self.env.var(&input_env_name(name)));

        let value = raw
            .map(|v| {
                if options.trim_whitespace {
                    v.trim().to_string()
                } else {
                    v
                }
            })
            .filter(|v| !v.is_empty());

        match value {
            None if options.required => Err(InputError::Missing {
                name: name.to_string(),
            }),
            other => Ok(other),
        }
    }

    #[must_use]
    pub fn optional(&self, name: &str) -> Option<String> {
        self.get(name, InputOptions::OPTIONAL).ok().flatten()
    }

    /// # Errors
    ///
    /// Returns [`InputError::Missing`] if the input is absent or empty.
    pub fn required(&self, name: &str) -> Result<String, InputError> {
        self.get(name, InputOptions::REQUIRED)?
            .ok_or_else(|| InputError::Missing {
                name: name.to_string(),
            })
    }

    /// Splits a multiline input into its non-empty lines.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Missing`] if the input is required and absent.
    pub fn multiline(&self, name: &str, options: InputOptions) -> Result<Vec<String>, InputError> {
        let Some(value) = self.get(name, options)? else {
            return Ok(Vec::new());
        };

        Ok(value
            .split('\n')
            .map(|line| {
                if options.trim_whitespace {
                    line.trim()
                } else {
                    line
                }
            })
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }
}
