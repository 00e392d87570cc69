//! Quotedeck core library — domain types, the quote book, store persistence,
//! import/export.
//!
//! Public API surface:
//! - [`types`] — [`Quote`], [`CategoryName`], boundary validation
//! - [`book`] — [`QuoteBook`] and the merge routine
//! - [`store`] — on-disk layout, load / save
//! - [`exchange`] — JSON document export and import
//! - [`error`] — [`StoreError`]

pub mod book;
pub mod error;
pub mod exchange;
pub mod store;
pub mod types;

pub use book::QuoteBook;
pub use error::StoreError;
pub use types::{CategoryName, Quote, RawQuote};
