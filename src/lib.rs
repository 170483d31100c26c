//! Step attribute extraction.
//!
//! Behaviour scenarios often describe fixtures inline, either as a doc string
//!
//! ```text
//! Given there is a user with these attributes:
//!   """
//!   name: Jane
//!   locked: true
//!   """
//! ```
//!
//! or as a data table
//!
//! ```text
//! Given there is a user with these attributes:
//!   | name   | Jane |
//!   | locked | true |
//! ```
//!
//! This crate turns the text following the step phrase into a flat
//! [`Attributes`] mapping regardless of which notation was used.

pub mod attributes;
pub mod config;
pub mod error;
pub mod extractor;
pub mod notation;

pub use attributes::Attributes;
pub use config::ExtractorConfig;
pub use error::ParseError;
pub use extractor::{AttributeExtractor, extract};
pub use notation::Notation;
