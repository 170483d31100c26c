//! Attribute extraction from step text.
//!
//! Extraction runs in three steps:
//!
//! 1. trim the text, drop a leading step phrase such as
//!    `with these attributes:` and trim again;
//! 2. detect the [`Notation`], doc string first;
//! 3. parse every line written in that notation.

use crate::attributes::Attributes;
use crate::config::ExtractorConfig;
use crate::error::ParseError;
use crate::notation::Notation;
use tracing::debug;

/// Turns step text into [`Attributes`].
///
/// The extractor only holds its configuration, so one instance can serve any
/// number of threads.
///
/// # Examples
/// ```rust
/// use step_attributes::AttributeExtractor;
///
/// let extractor = AttributeExtractor::default();
/// let attrs = extractor
///     .extract(" with these attributes:\n  name: Jane\n  locked: true\n")
///     .unwrap();
/// assert_eq!(attrs.get("name"), Some("Jane"));
/// assert_eq!(attrs.get("locked"), Some("true"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeExtractor {
    config: ExtractorConfig,
}

impl AttributeExtractor {
    /// Build an extractor from `config`.
    #[must_use]
    pub const fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The configuration this extractor was built with.
    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Strip whitespace and the leading step phrase from `raw`.
    #[must_use]
    pub fn normalize<'a>(&self, raw: &'a str) -> &'a str {
        self.config.strip_step_phrase(raw.trim()).trim()
    }

    /// Extract attributes from `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the normalised text contains neither a
    /// `name: value` line nor a `| name | value |` row.
    pub fn extract(&self, raw: &str) -> Result<Attributes, ParseError> {
        let text = self.normalize(raw);
        let Some(notation) = Notation::detect(text) else {
            debug!(text, "step text matched no attribute notation");
            return Err(ParseError::new(text));
        };
        let attributes = notation.parse(text);
        debug!(
            %notation,
            attributes = attributes.len(),
            "extracted step attributes"
        );
        Ok(attributes)
    }
}

/// Extract attributes from `raw` with the default step phrases.
///
/// # Errors
///
/// Returns [`ParseError`] when `raw` is written in neither notation.
pub fn extract(raw: &str) -> Result<Attributes, ParseError> {
    AttributeExtractor::default().extract(raw)
}
