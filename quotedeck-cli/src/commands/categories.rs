//! `quotedeck categories` — distinct categories with counts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use quotedeck_core::store;

/// Arguments for `quotedeck categories`.
#[derive(Args, Debug)]
pub struct CategoriesArgs {}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "category")]
    name: String,
    #[tabled(rename = "quotes")]
    count: usize,
}

impl CategoriesArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let book = store::load_quotes_at(&home).context("failed to load quote store")?;
        let selected = store::load_selected_category_at(&home)
            .context("failed to load category filter")?;

        let categories = book.categories();
        if categories.is_empty() {
            println!("No categories yet.");
            return Ok(());
        }

        let rows: Vec<CategoryRow> = categories
            .iter()
            .map(|category| CategoryRow {
                name: if Some(category) == selected.as_ref() {
                    format!("{} {}", category, "(active)".green())
                } else {
                    category.to_string()
                },
                count: book.count_in(category),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
