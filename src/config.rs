//! Extractor configuration.
//!
//! [`ExtractorConfig`] describes the step phrase stripped from the front of
//! the attribute text. Every field has a default, so a harness can embed the
//! struct in its own configuration and override only what it needs.

use serde::Deserialize;

const DEFAULT_CONNECTIVES: [&str; 2] = ["with", "and"];
const DEFAULT_PHRASE: &str = "these attributes:";

/// Settings for [`AttributeExtractor`](crate::AttributeExtractor).
///
/// # Examples
/// ```rust
/// use step_attributes::ExtractorConfig;
///
/// let config = ExtractorConfig::default();
/// assert_eq!(config.connectives, ["with", "and"]);
/// assert_eq!(config.phrase, "these attributes:");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Words that may precede the phrase, tried in order.
    pub connectives: Vec<String>,
    /// Literal phrase following a connective and a single space.
    pub phrase: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            connectives: Vec::from(DEFAULT_CONNECTIVES.map(str::to_owned)),
            phrase: DEFAULT_PHRASE.to_owned(),
        }
    }
}

impl ExtractorConfig {
    /// Remove the first leading `<connective> <phrase>` from `text`.
    ///
    /// Matching is case-sensitive and anchored at the start of `text`.
    /// Text without the phrase is returned unchanged.
    #[must_use]
    pub fn strip_step_phrase<'a>(&self, text: &'a str) -> &'a str {
        self.connectives
            .iter()
            .find_map(|connective| {
                text.strip_prefix(connective.as_str())?
                    .strip_prefix(' ')?
                    .strip_prefix(self.phrase.as_str())
            })
            .unwrap_or(text)
    }
}
