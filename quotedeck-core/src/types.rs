//! Domain types for the quotedeck collection.
//!
//! A [`Quote`] is the sole persisted record: a `(text, category)` pair.
//! Untyped records arriving from imports or the remote feed are deserialized
//! as [`RawQuote`] and must pass through [`Quote::new`] before they enter the
//! collection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed category label. Free text, unbounded cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryName(pub String);

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CategoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// A single quote record.
///
/// Equality is exact on both fields — case- and whitespace-sensitive — and is
/// what deduplication keys on. Quotes carry no identifier, timestamp, or
/// version; they are appended, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: CategoryName,
}

impl Quote {
    /// Build a validated quote. Both fields must be non-empty.
    pub fn new(
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let text = text.into();
        let category = category.into();
        if text.is_empty() {
            return Err(StoreError::EmptyField { field: "text" });
        }
        if category.is_empty() {
            return Err(StoreError::EmptyField { field: "category" });
        }
        Ok(Self {
            text,
            category: CategoryName(category),
        })
    }

    /// Display form shown to the user and recorded as the session note.
    pub fn render(&self) -> String {
        format!("\"{}\" — {}", self.text, self.category)
    }
}

// ---------------------------------------------------------------------------
// Boundary shape
// ---------------------------------------------------------------------------

/// Untyped record shape accepted at the import boundary.
///
/// Either field may be missing; conversion to [`Quote`] rejects records that
/// lack a non-empty value for both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuote {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<RawQuote> for Quote {
    type Error = StoreError;

    fn try_from(raw: RawQuote) -> Result<Self, Self::Error> {
        Quote::new(
            raw.text.unwrap_or_default(),
            raw.category.unwrap_or_default(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
