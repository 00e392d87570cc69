//! `quotedeck list` — dump the full collection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use quotedeck_core::store;

/// Arguments for `quotedeck list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "quote")]
    text: String,
    #[tabled(rename = "category")]
    category: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let book = store::load_quotes_at(&home).context("failed to load quote store")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(book.quotes())
                    .context("failed to serialize collection")?
            );
            return Ok(());
        }

        if book.is_empty() {
            println!("No quotes in the collection.");
            return Ok(());
        }

        let rows: Vec<QuoteRow> = book
            .quotes()
            .iter()
            .enumerate()
            .map(|(i, quote)| QuoteRow {
                index: i + 1,
                text: quote.text.clone(),
                category: quote.category.to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("{} quotes", book.len());
        Ok(())
    }
}
