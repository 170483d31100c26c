//! Error raised when step text cannot be turned into attributes.
use miette::Diagnostic;
use thiserror::Error;

/// Error returned when normalised step text matches neither the doc string
/// nor the data table notation.
///
/// The error keeps the text after the step phrase and surrounding whitespace
/// were removed, so the diagnostic points at exactly what the scenario author
/// wrote.
///
/// # Examples
/// ```rust
/// use step_attributes::extract;
///
/// let err = extract(" with these attributes:\n just some prose\n").unwrap_err();
/// assert_eq!(err.text(), "just some prose");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("expected '{text}' to be a valid doc string or data table, but it was not parsable")]
#[diagnostic(
    code(step_attributes::parse),
    help("Write one attribute per line as `name: value`, or as a table row `| name | value |`.")
)]
pub struct ParseError {
    text: String,
}

impl ParseError {
    #[must_use]
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The normalised text that failed to parse.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}
