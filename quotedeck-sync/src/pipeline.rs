//! Shared reconciliation pipeline used by the one-shot command and the watch
//! loop.
//!
//! One pass: load the local collection, fetch the remote feed, merge novel
//! records, persist when anything was admitted, then push the full collection
//! back. A failed fetch abandons the pass; a failed push is logged and
//! ignored.

use std::path::Path;

use chrono::Utc;

use quotedeck_core::store;

use crate::error::SyncError;
use crate::remote::RemoteFeed;
use crate::state::{self, SyncState};

/// Outcome of a single reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The fetch failed; the pass was abandoned with no appends, no
    /// persistence write, and no push.
    Skipped { reason: String },

    /// The pass ran to completion.
    Completed {
        /// Records the remote feed offered after boundary mapping.
        fetched: usize,
        /// Records admitted into the local collection.
        appended: usize,
        /// Collection size after the pass.
        total: usize,
        /// Whether the follow-up push was acknowledged.
        pushed: bool,
    },
}

impl SyncOutcome {
    /// Records admitted by this pass (0 for a skipped pass).
    pub fn appended(&self) -> usize {
        match self {
            SyncOutcome::Skipped { .. } => 0,
            SyncOutcome::Completed { appended, .. } => *appended,
        }
    }
}

/// Run one reconciliation pass against `feed`.
///
/// This is the canonical entrypoint for both `quotedeck sync` and the watch
/// loop. With `dry_run` set, nothing is persisted and no push is attempted.
pub fn run(home: &Path, feed: &dyn RemoteFeed, dry_run: bool) -> Result<SyncOutcome, SyncError> {
    let mut book = store::load_quotes_at(home)?;

    let remote = match feed.fetch() {
        Ok(remote) => remote,
        Err(err) => {
            tracing::warn!(error = %err, "remote fetch failed; skipping pass");
            return Ok(SyncOutcome::Skipped {
                reason: err.to_string(),
            });
        }
    };

    let fetched = remote.len();
    let appended = book.merge(remote);
    let total = book.len();

    if dry_run {
        return Ok(SyncOutcome::Completed {
            fetched,
            appended,
            total,
            pushed: false,
        });
    }

    if appended > 0 {
        store::save_quotes_at(home, &book)?;
        state::save_at(
            home,
            &SyncState {
                synced_at: Utc::now(),
                appended,
                total,
            },
        )?;
    }

    // Push is attempted whenever the fetch succeeded, even with nothing new.
    let pushed = match feed.push(book.quotes()) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "push to remote failed; local state unaffected");
            false
        }
    };

    tracing::info!(fetched, appended, total, pushed, "reconciliation pass completed");
    Ok(SyncOutcome::Completed {
        fetched,
        appended,
        total,
        pushed,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tempfile::TempDir;

    use quotedeck_core::{Quote, QuoteBook};

    use super::*;
    use crate::remote::SERVER_CATEGORY;

    /// Scripted feed: serves a fixed remote collection and records pushes.
    struct StubFeed {
        remote: Vec<Quote>,
        fail_fetch: bool,
        fail_push: bool,
        pushes: RefCell<Vec<Vec<Quote>>>,
    }

    impl StubFeed {
        fn serving(remote: Vec<Quote>) -> Self {
            Self {
                remote,
                fail_fetch: false,
                fail_push: false,
                pushes: RefCell::new(vec![]),
            }
        }

        fn unreachable_feed() -> Self {
            Self {
                fail_fetch: true,
                ..Self::serving(vec![])
            }
        }
    }

    impl RemoteFeed for StubFeed {
        fn fetch(&self) -> Result<Vec<Quote>, SyncError> {
            if self.fail_fetch {
                return Err(SyncError::Body {
                    url: "stub".to_string(),
                    source: std::io::Error::other("connection refused"),
                });
            }
            Ok(self.remote.clone())
        }

        fn push(&self, quotes: &[Quote]) -> Result<(), SyncError> {
            if self.fail_push {
                return Err(SyncError::Body {
                    url: "stub".to_string(),
                    source: std::io::Error::other("connection reset"),
                });
            }
            self.pushes.borrow_mut().push(quotes.to_vec());
            Ok(())
        }
    }

    fn quote(text: &str, category: &str) -> Quote {
        Quote::new(text, category).expect("valid quote")
    }

    fn seed_store(home: &TempDir, quotes: Vec<Quote>) {
        store::save_quotes_at(home.path(), &QuoteBook::new(quotes)).expect("seed store");
    }

    #[test]
    fn pass_appends_novel_records_and_persists() {
        let home = TempDir::new().unwrap();
        seed_store(&home, vec![quote("A", "cat1")]);

        let feed = StubFeed::serving(vec![quote("A", "cat1"), quote("B", SERVER_CATEGORY)]);
        let outcome = run(home.path(), &feed, false).expect("run");

        assert_eq!(
            outcome,
            SyncOutcome::Completed {
                fetched: 2,
                appended: 1,
                total: 2,
                pushed: true,
            }
        );

        let reloaded = store::load_quotes_at(home.path()).expect("reload");
        assert_eq!(
            reloaded.quotes(),
            &[quote("A", "cat1"), quote("B", SERVER_CATEGORY)]
        );

        // Sidecar recorded the pass.
        let sync_state = state::load_at(home.path()).expect("state").expect("recorded");
        assert_eq!(sync_state.appended, 1);
        assert_eq!(sync_state.total, 2);

        // The push carried the full updated collection.
        let pushes = feed.pushes.borrow();
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].len(), 2);
    }

    #[test]
    fn second_pass_with_same_remote_is_a_noop() {
        let home = TempDir::new().unwrap();
        seed_store(&home, vec![quote("A", "cat1")]);
        let feed = StubFeed::serving(vec![quote("B", SERVER_CATEGORY)]);

        run(home.path(), &feed, false).expect("first pass");
        let outcome = run(home.path(), &feed, false).expect("second pass");

        assert_eq!(outcome.appended(), 0);
        let reloaded = store::load_quotes_at(home.path()).expect("reload");
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn noop_pass_still_pushes() {
        let home = TempDir::new().unwrap();
        seed_store(&home, vec![quote("A", "cat1")]);
        let feed = StubFeed::serving(vec![quote("A", "cat1")]);

        let outcome = run(home.path(), &feed, false).expect("run");
        assert_eq!(outcome.appended(), 0);
        assert_eq!(feed.pushes.borrow().len(), 1, "push happens even when n = 0");

        // Nothing new was admitted, so no sidecar write either.
        assert_eq!(state::load_at(home.path()).expect("state"), None);
    }

    #[test]
    fn fetch_failure_skips_everything() {
        let home = TempDir::new().unwrap();
        seed_store(&home, vec![quote("A", "cat1")]);
        let feed = StubFeed::unreachable_feed();

        let outcome = run(home.path(), &feed, false).expect("run");
        assert!(matches!(outcome, SyncOutcome::Skipped { .. }));
        assert_eq!(outcome.appended(), 0);
        assert!(feed.pushes.borrow().is_empty(), "no push after failed fetch");

        let reloaded = store::load_quotes_at(home.path()).expect("reload");
        assert_eq!(reloaded.len(), 1, "local collection untouched");
    }

    #[test]
    fn push_failure_leaves_local_state_intact() {
        let home = TempDir::new().unwrap();
        seed_store(&home, vec![quote("A", "cat1")]);
        let feed = StubFeed {
            fail_push: true,
            ..StubFeed::serving(vec![quote("B", SERVER_CATEGORY)])
        };

        let outcome = run(home.path(), &feed, false).expect("run");
        assert_eq!(
            outcome,
            SyncOutcome::Completed {
                fetched: 1,
                appended: 1,
                total: 2,
                pushed: false,
            }
        );

        // The merge was persisted before the push attempt.
        let reloaded = store::load_quotes_at(home.path()).expect("reload");
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn dry_run_writes_and_pushes_nothing() {
        let home = TempDir::new().unwrap();
        seed_store(&home, vec![quote("A", "cat1")]);
        let feed = StubFeed::serving(vec![quote("B", SERVER_CATEGORY)]);

        let outcome = run(home.path(), &feed, true).expect("run");
        assert_eq!(outcome.appended(), 1);
        assert!(feed.pushes.borrow().is_empty());

        let reloaded = store::load_quotes_at(home.path()).expect("reload");
        assert_eq!(reloaded.len(), 1, "dry-run must not persist the merge");
    }
}
