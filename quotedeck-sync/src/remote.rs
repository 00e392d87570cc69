//! Remote quote feed.
//!
//! The placeholder endpoint serves arbitrary post-shaped records; only the
//! first [`FEED_LIMIT`] are considered, each mapped into a quote with the
//! fixed [`SERVER_CATEGORY`] label. Records without a usable `title` are
//! dropped at the boundary and never enter the domain model.

use serde_json::Value;

use quotedeck_core::Quote;

use crate::error::{http_err, SyncError};

/// Default remote endpoint (JSONPlaceholder posts).
pub const DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Number of remote records considered per fetch.
pub const FEED_LIMIT: usize = 5;

/// Category label applied to every remotely fetched quote.
pub const SERVER_CATEGORY: &str = "Server";

/// A source of remote quotes plus a one-way push channel.
pub trait RemoteFeed {
    /// Fetch the remote collection, already mapped into quote records.
    fn fetch(&self) -> Result<Vec<Quote>, SyncError>;

    /// Push the full local collection. One-way: the acknowledgment is
    /// discarded and a failure never affects local state.
    fn push(&self, quotes: &[Quote]) -> Result<(), SyncError>;
}

/// HTTP implementation over a placeholder-style endpoint.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpFeed {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl RemoteFeed for HttpFeed {
    fn fetch(&self) -> Result<Vec<Quote>, SyncError> {
        let response = ureq::get(&self.url)
            .call()
            .map_err(|e| http_err(&self.url, e))?;
        let records: Vec<Value> = response.into_json().map_err(|e| SyncError::Body {
            url: self.url.clone(),
            source: e,
        })?;
        Ok(map_records(records))
    }

    fn push(&self, quotes: &[Quote]) -> Result<(), SyncError> {
        let body = serde_json::to_value(quotes)?;
        let response = ureq::post(&self.url)
            .send_json(body)
            .map_err(|e| http_err(&self.url, e))?;

        // The acknowledgment is opaque; read it for the log and drop it.
        match response.into_json::<Value>() {
            Ok(ack) => tracing::debug!(ack = %ack, "push acknowledged"),
            Err(err) => tracing::debug!(error = %err, "push acknowledged with unreadable body"),
        }
        Ok(())
    }
}

/// Map raw placeholder records into quotes: first [`FEED_LIMIT`] records,
/// `title` → text, fixed [`SERVER_CATEGORY`].
pub fn map_records(records: Vec<Value>) -> Vec<Quote> {
    records
        .into_iter()
        .take(FEED_LIMIT)
        .filter_map(|record| {
            let title = record.get("title").and_then(Value::as_str)?;
            Quote::new(title, SERVER_CATEGORY).ok()
        })
        .collect()
}
