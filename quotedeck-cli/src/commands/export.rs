//! `quotedeck export` — write the collection to a JSON document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quotedeck_core::{exchange, store};

/// Arguments for `quotedeck export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination path for the JSON document.
    pub path: PathBuf,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let book = store::load_quotes_at(&home).context("failed to load quote store")?;

        exchange::export_to_path(&self.path, &book)
            .with_context(|| format!("export failed for '{}'", self.path.display()))?;

        println!(
            "{} exported {} quotes to {}",
            "✓".green(),
            book.len(),
            self.path.display()
        );
        Ok(())
    }
}
