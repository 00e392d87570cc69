//! Quotedeck — local quote collection with remote reconciliation.
//!
//! # Usage
//!
//! ```text
//! quotedeck show [--category <name>]
//! quotedeck add <text> --category <name>
//! quotedeck list [--json]
//! quotedeck categories
//! quotedeck export <path>
//! quotedeck import <path>
//! quotedeck sync [--dry-run] [--server <url>]
//! quotedeck watch [--interval <secs>] [--server <url>]
//! quotedeck status [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, categories::CategoriesArgs, export::ExportArgs, import::ImportArgs,
    list::ListArgs, show::ShowArgs, status::StatusArgs, sync::SyncArgs, watch::WatchArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "quotedeck",
    version,
    about = "Manage a local quote collection reconciled with a remote feed",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display a random quote, optionally filtered by category.
    Show(ShowArgs),

    /// Validate and add a new quote to the collection.
    Add(AddArgs),

    /// List the full collection.
    List(ListArgs),

    /// List distinct categories with quote counts.
    Categories(CategoriesArgs),

    /// Export the collection to a JSON document.
    Export(ExportArgs),

    /// Import quotes from a JSON document.
    Import(ImportArgs),

    /// Run one reconciliation pass against the remote feed.
    Sync(SyncArgs),

    /// Re-run the reconciliation pass on a fixed interval.
    Watch(WatchArgs),

    /// Show collection and sync status.
    Status(StatusArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Show(args) => args.run(),
        Commands::Add(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Categories(args) => args.run(),
        Commands::Export(args) => args.run(),
        Commands::Import(args) => args.run(),
        Commands::Sync(args) => args.run(),
        Commands::Watch(args) => args.run(),
        Commands::Status(args) => args.run(),
    }
}
