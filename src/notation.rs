//! Textual notations accepted for step attributes.
//!
//! Two notations are recognised, each by a per-line pattern:
//!
//! - doc string lines such as `name: Jane`, split on the first colon;
//! - data table rows such as `| name | Jane |`, exactly two cells wide.
//!
//! Detection tries [`Notation::ALL`] in order and picks the first notation
//! with at least one matching line. A blob containing any doc string line is
//! parsed as a doc string even if it also contains table rows.

use crate::attributes::Attributes;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Key: everything before the first colon, with at least one visible
// character. Value: the rest of the line, possibly empty.
const DOC_STRING_PATTERN: &str = r"(?m)^[^\S\n]*([^:\n]*[^:\s][^:\n]*):(.*)$";

// Exactly two cells between a leading and a trailing pipe.
const DATA_TABLE_PATTERN: &str = r"(?m)^[^\S\n]*\|([^|\n]*[^|\s][^|\n]*)\|([^|\n]*)\|[^\S\n]*$";

#[expect(
    clippy::expect_used,
    reason = "patterns are compile-time constants covered by tests"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("notation pattern should compile")
}

static DOC_STRING: LazyLock<Regex> = LazyLock::new(|| compile(DOC_STRING_PATTERN));
static DATA_TABLE: LazyLock<Regex> = LazyLock::new(|| compile(DATA_TABLE_PATTERN));

/// Notation used to write an attribute block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `key: value` lines.
    DocString,
    /// `| key | value |` rows.
    DataTable,
}

impl Notation {
    /// All notations in detection priority order.
    pub const ALL: [Self; 2] = [Self::DocString, Self::DataTable];

    /// Classify `text` by the first notation with a matching line.
    ///
    /// Returns `None` when no line matches either notation.
    ///
    /// # Examples
    /// ```rust
    /// use step_attributes::Notation;
    ///
    /// assert_eq!(Notation::detect("name: Jane"), Some(Notation::DocString));
    /// assert_eq!(Notation::detect("| name | Jane |"), Some(Notation::DataTable));
    /// assert_eq!(Notation::detect("prose"), None);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|notation| notation.pattern().is_match(text))
    }

    /// Collect every line of `text` written in this notation.
    ///
    /// Lines in any other shape are skipped. Names and values are trimmed;
    /// later duplicates replace earlier ones.
    #[must_use]
    pub fn parse(self, text: &str) -> Attributes {
        self.pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str().trim();
                let value = caps.get(2)?.as_str().trim();
                Some((name, value))
            })
            .collect()
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::DocString => &DOC_STRING,
            Self::DataTable => &DATA_TABLE,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DocString => "doc string",
            Self::DataTable => "data table",
        })
    }
}
