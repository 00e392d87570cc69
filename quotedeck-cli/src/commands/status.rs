//! `quotedeck status` — collection and sync visibility.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use quotedeck_core::store;
use quotedeck_sync::state;

/// Arguments for `quotedeck status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatusJson {
    quotes: usize,
    categories: usize,
    selected_category: Option<String>,
    last_sync_at: Option<String>,
    last_sync_appended: Option<usize>,
    last_viewed: Option<String>,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "category")]
    name: String,
    #[tabled(rename = "quotes")]
    count: usize,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let book = store::load_quotes_at(&home).context("failed to load quote store")?;
        let selected = store::load_selected_category_at(&home)
            .context("failed to load category filter")?;
        let sync_state = state::load_at(&home).context("failed to load sync state")?;
        let last_viewed = store::load_last_viewed_at(&home);

        let categories = book.categories();

        if self.json {
            let payload = StatusJson {
                quotes: book.len(),
                categories: categories.len(),
                selected_category: selected.map(|c| c.0),
                last_sync_at: sync_state.as_ref().map(|s| s.synced_at.to_rfc3339()),
                last_sync_appended: sync_state.as_ref().map(|s| s.appended),
                last_viewed,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload)
                    .context("failed to serialize status JSON")?
            );
            return Ok(());
        }

        let last_sync = match &sync_state {
            Some(s) => format_age(s.synced_at),
            None => "never".to_string(),
        };
        println!(
            "Quotedeck v{} | {} quotes | {} categories | last sync {}",
            env!("CARGO_PKG_VERSION"),
            book.len(),
            categories.len(),
            last_sync,
        );

        if let Some(s) = &sync_state {
            println!(
                "Last pass admitted {} new quotes ({} total afterwards).",
                s.appended, s.total
            );
        }

        if !categories.is_empty() {
            let rows: Vec<CategoryRow> = categories
                .iter()
                .map(|category| CategoryRow {
                    name: category.to_string(),
                    count: book.count_in(category),
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }

        match &selected {
            Some(category) => println!("Active filter: {category}"),
            None => println!("Active filter: all categories"),
        }

        if let Some(last) = last_viewed {
            println!("{}", format!("last viewed: {last}").bright_black());
        }
        Ok(())
    }
}

/// Human-readable age of a timestamp, coarsest useful unit only.
fn format_age(at: DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(at);
    let seconds = delta.num_seconds().max(0);
    if seconds < 60 {
        format!("{seconds}s ago")
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}
