mod actions;
mod formatter;
mod json;
mod plain;

pub(crate) use actions::publish;
pub(crate) use formatter::OutputFormatter;
pub(crate) use json::JsonFormatter;
pub(crate) use plain::PlainTextFormatter;
