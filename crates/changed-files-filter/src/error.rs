use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid glob pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("invalid filter name '{name}'; use letters, digits, '-' and '_'")]
    InvalidName { name: String },

    #[error("negated pattern '{pattern}' must belong to a named filter")]
    OrphanNegation { pattern: String },

    #[error("filter '{name}' has no patterns")]
    EmptyFilter { name: String },

    #[error("filter '{name}' only excludes paths; add at least one positive pattern")]
    NoPositivePattern { name: String },

    #[error("'{name}' is used both as a filter name and as a bare pattern")]
    NameConflict { name: String },
}
