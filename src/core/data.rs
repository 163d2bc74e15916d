//! Core data structures for quote selection
//!
//! This module contains the fundamental data structures used throughout
//! the quotes application.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single quote with its attribution
///
/// Serialized as `{"Text": .., "Author": ..}`. When reading an override file
/// field names match case-insensitively, `null` and missing fields leave the
/// field empty, and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Author")]
    pub author: String,
}

impl<'de> Deserialize<'de> for Quote {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(QuoteVisitor)
    }
}

struct QuoteVisitor;

impl<'de> Visitor<'de> for QuoteVisitor {
    type Value = Quote;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quote object with text and author fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut quote = Quote::new("", "");

        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("text") {
                &mut quote.text
            } else if key.eq_ignore_ascii_case("author") {
                &mut quote.author
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            // null keeps whatever the field already holds
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }

        Ok(quote)
    }
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Where the active quote list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteSource {
    Defaults,
    Override(PathBuf),
}

/// The ordered, non-empty list of quotes used for one run
#[derive(Debug, Clone)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
    source: QuoteSource,
}

impl QuoteStore {
    /// Build a store from an already validated list.
    ///
    /// Callers outside the loader go through `storage`, which never hands
    /// over an empty list.
    pub(crate) fn new(quotes: Vec<Quote>, source: QuoteSource) -> Self {
        debug_assert!(!quotes.is_empty());
        Self { quotes, source }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn source(&self) -> &QuoteSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
