//! `quotedeck add` — validate and append a quote.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quotedeck_core::{store, Quote};

/// Arguments for `quotedeck add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// The quotation body.
    pub text: String,

    /// Category label for the quote.
    #[arg(long)]
    pub category: String,
}

impl AddArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;

        // Form input is trimmed before validation; empty fields are rejected
        // with nothing mutated.
        let quote = Quote::new(self.text.trim(), self.category.trim())
            .context("both quote text and category are required")?;

        let mut book = store::load_quotes_at(&home).context("failed to load quote store")?;
        if !book.add(quote.clone()) {
            println!(
                "That quote is already in '{}' — nothing added.",
                quote.category
            );
            return Ok(());
        }

        store::save_quotes_at(&home, &book).context("failed to save quote store")?;
        println!(
            "{} added to '{}' ({} total)",
            "✓".green(),
            quote.category,
            book.len()
        );
        Ok(())
    }
}
