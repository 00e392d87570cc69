//! `quotedeck show` — display a random quote.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quotedeck_core::{store, CategoryName};

/// Arguments for `quotedeck show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Restrict to one category and persist it as the active filter.
    /// Pass `all` to clear the filter.
    #[arg(long)]
    pub category: Option<String>,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let book = store::load_quotes_at(&home).context("failed to load quote store")?;

        let filter = match self.category {
            Some(name) => {
                let filter = if name == store::ALL_CATEGORIES {
                    None
                } else {
                    Some(CategoryName::from(name))
                };
                store::save_selected_category_at(&home, filter.as_ref())
                    .context("failed to persist category filter")?;
                filter
            }
            None => store::load_selected_category_at(&home)
                .context("failed to load category filter")?,
        };

        if let Some(last) = store::load_last_viewed_at(&home) {
            println!("{}", format!("last viewed: {last}").bright_black());
        }

        let Some(quote) = book.pick_random(filter.as_ref()) else {
            match &filter {
                Some(category) => println!("No quotes in category '{category}'."),
                None => println!("No quotes in the collection."),
            }
            return Ok(());
        };

        let rendered = quote.render();
        println!("{rendered}");

        // Session note is best-effort.
        let _ = store::save_last_viewed_at(&home, &rendered);
        Ok(())
    }
}
