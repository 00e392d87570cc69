//! `quotedeck import` — merge quotes from a JSON document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quotedeck_core::{exchange, store};

/// Arguments for `quotedeck import`.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to a JSON array of quote records.
    pub path: PathBuf,
}

impl ImportArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let mut book = store::load_quotes_at(&home).context("failed to load quote store")?;

        // A malformed document aborts here with nothing merged; records that
        // fail validation were already dropped inside read_import.
        let candidates = exchange::read_import(&self.path)
            .with_context(|| format!("import failed for '{}'", self.path.display()))?;
        let offered = candidates.len();

        let appended = book.merge(candidates);
        if appended > 0 {
            store::save_quotes_at(&home, &book).context("failed to save quote store")?;
        }

        println!(
            "{} imported {} new quotes ({} duplicates skipped, {} total)",
            "✓".green(),
            appended,
            offered - appended,
            book.len()
        );
        Ok(())
    }
}
