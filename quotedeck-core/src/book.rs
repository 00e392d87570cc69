//! The in-memory quote collection and its single mutation entry point.

use rand::seq::SliceRandom;

use crate::types::{CategoryName, Quote};

/// Owned application state: the full local collection, insertion-ordered.
///
/// Every ingest path (CLI add, file import, remote sync) mutates the
/// collection through [`QuoteBook::merge`], so a `(text, category)` pair can
/// never appear twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn into_quotes(self) -> Vec<Quote> {
        self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Exact-field membership test.
    pub fn contains(&self, quote: &Quote) -> bool {
        self.quotes.iter().any(|q| q == quote)
    }

    /// Merge `incoming` into the collection, deduplicating by exact
    /// `(text, category)` equality.
    ///
    /// Each incoming record is checked against the current collection,
    /// including records appended earlier in the same call, so a batch with
    /// internal duplicates admits only the first occurrence. The appended
    /// tail preserves the relative order of `incoming`. Returns the number of
    /// records appended.
    pub fn merge(&mut self, incoming: Vec<Quote>) -> usize {
        let mut appended = 0;
        for quote in incoming {
            if !self.contains(&quote) {
                self.quotes.push(quote);
                appended += 1;
            }
        }
        appended
    }

    /// Single-record merge. Returns `true` if the quote was new.
    pub fn add(&mut self, quote: Quote) -> bool {
        self.merge(vec![quote]) == 1
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<CategoryName> {
        let mut seen: Vec<CategoryName> = Vec::new();
        for quote in &self.quotes {
            if !seen.contains(&quote.category) {
                seen.push(quote.category.clone());
            }
        }
        seen
    }

    /// Number of quotes carrying `category`.
    pub fn count_in(&self, category: &CategoryName) -> usize {
        self.quotes
            .iter()
            .filter(|q| &q.category == category)
            .count()
    }

    /// Pick a uniformly random quote, optionally restricted to one category.
    ///
    /// Returns `None` when the (filtered) collection is empty.
    pub fn pick_random(&self, filter: Option<&CategoryName>) -> Option<&Quote> {
        let mut rng = rand::thread_rng();
        match filter {
            Some(category) => {
                let filtered: Vec<&Quote> = self
                    .quotes
                    .iter()
                    .filter(|q| &q.category == category)
                    .collect();
                filtered.choose(&mut rng).copied()
            }
            None => self.quotes.choose(&mut rng),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
