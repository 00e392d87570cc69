//! # quotedeck-sync
//!
//! Remote feed client, reconciliation pipeline, and sync-state sidecar.
//!
//! Call [`pipeline::run`] to execute one fetch → merge → persist → push pass
//! against a [`RemoteFeed`]. The one-shot `quotedeck sync` command and the
//! watch loop both go through this entrypoint.

pub mod error;
pub mod pipeline;
pub mod remote;
pub mod state;

pub use error::SyncError;
pub use pipeline::SyncOutcome;
pub use remote::{HttpFeed, RemoteFeed, DEFAULT_SERVER_URL};
pub use state::SyncState;
