use std::fmt;

use thiserror::Error;

/// Failures of the document layer around the totals engine.
///
/// Computing totals or spelling an amount never produces one of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FatouraError {
    /// Opt-in line or option checks rejected the document.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A document could not be assembled (missing party, input limits).
    #[error("builder error: {0}")]
    Builder(String),

    #[error("numbering error: {0}")]
    Numbering(String),

    /// Settings JSON could not be read or written.
    #[error("settings error: {0}")]
    Settings(String),
}

/// One rejected field found by [`validate_line_items`](super::validate_line_items)
/// or [`validate_options`](super::validate_options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Short rule code, e.g. `LINE-QTY`.
    pub rule: &'static str,
    /// Path of the offending field, e.g. `lines[2].quantity`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(rule: &'static str, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.field, self.message)
    }
}

/// Fold every failed rule into one [`FatouraError::Validation`].
pub(crate) fn join_errors(errors: &[ValidationError]) -> FatouraError {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    FatouraError::Validation(joined)
}
