//! End-to-end store behavior: persist, reload, merge, export, re-import.

use quotedeck_core::{exchange, store, Quote, QuoteBook};
use tempfile::TempDir;

fn quote(text: &str, category: &str) -> Quote {
    Quote::new(text, category).expect("valid quote")
}

#[test]
fn full_roundtrip_through_disk_and_export() {
    let home = TempDir::new().expect("home");
    let scratch = TempDir::new().expect("scratch");

    // Fresh store starts from the seeds.
    let mut book = store::load_quotes_at(home.path()).expect("load seeds");
    let seeded = book.len();
    assert!(seeded > 0);

    // Add a quote and persist.
    assert!(book.add(quote("The obstacle is the way.", "Stoicism")));
    store::save_quotes_at(home.path(), &book).expect("save");

    // Reload and confirm the overwrite carried everything.
    let reloaded = store::load_quotes_at(home.path()).expect("reload");
    assert_eq!(reloaded.len(), seeded + 1);
    assert!(reloaded.contains(&quote("The obstacle is the way.", "Stoicism")));

    // Export, then import the exported document with no additions in between:
    // every entry is already present, so the merge admits nothing.
    let export_path = scratch.path().join("export.json");
    exchange::export_to_path(&export_path, &reloaded).expect("export");
    let candidates = exchange::read_import(&export_path).expect("import");
    assert_eq!(candidates.len(), reloaded.len());

    let mut merged = reloaded.clone();
    assert_eq!(merged.merge(candidates), 0);
    assert_eq!(merged, reloaded);
}

#[test]
fn merge_then_save_preserves_admitted_tail() {
    let home = TempDir::new().expect("home");

    let mut book = QuoteBook::new(vec![quote("A", "cat1")]);
    let appended = book.merge(vec![quote("A", "cat1"), quote("B", "cat2")]);
    assert_eq!(appended, 1);
    assert_eq!(book.quotes(), &[quote("A", "cat1"), quote("B", "cat2")]);

    store::save_quotes_at(home.path(), &book).expect("save");
    let reloaded = store::load_quotes_at(home.path()).expect("reload");
    assert_eq!(reloaded, book);
}
