//! `quotedeck sync` — one reconciliation pass against the remote feed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quotedeck_sync::{pipeline, HttpFeed, SyncOutcome, DEFAULT_SERVER_URL};

/// Arguments for `quotedeck sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Show what the pass would admit without persisting or pushing.
    #[arg(long)]
    pub dry_run: bool,

    /// Remote endpoint URL.
    #[arg(long, env = "QUOTEDECK_SERVER_URL")]
    pub server: Option<String>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let feed = HttpFeed::new(
            self.server
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
        );

        let outcome = pipeline::run(&home, &feed, self.dry_run)
            .with_context(|| format!("sync failed against '{}'", feed.url()))?;
        print_outcome(&outcome, self.dry_run);
        Ok(())
    }
}

pub(crate) fn print_outcome(outcome: &SyncOutcome, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    match outcome {
        SyncOutcome::Skipped { reason } => {
            println!("{prefix}{} sync skipped: {reason}", "✗".yellow());
        }
        SyncOutcome::Completed {
            fetched,
            appended,
            total,
            pushed,
        } => {
            if *appended > 0 {
                println!(
                    "{prefix}{} synced with server ({appended} new of {fetched} fetched, {total} total)",
                    "✓".green(),
                );
            } else {
                println!("{prefix}· up to date ({fetched} fetched, {total} total)");
            }
            if !dry_run && !*pushed {
                println!("  push to server failed; local collection is unaffected");
            }
        }
    }
}
