//! On-disk quote store.
//!
//! # Storage layout
//!
//! ```text
//! ~/.quotedeck/
//!   quotes.json          (whole collection, JSON array — mode 0600)
//!   selected_category    (persisted category filter, plain text)
//!   sync_state.json      (written by quotedeck-sync)
//!   run/
//!     last_viewed        (most recently displayed quote, best-effort)
//! ```
//!
//! The collection is always written wholesale: every mutating operation
//! serializes the full array and replaces `quotes.json` atomically
//! (`.tmp` sibling → chmod 0600 → rename).
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use crate::book::QuoteBook;
use crate::error::{io_err, StoreError};
use crate::types::{CategoryName, Quote};

/// Filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.quotedeck/`
///
/// Creates the directory (mode `0700`) if it does not yet exist.
pub fn deck_dir_at(home: &Path) -> Result<PathBuf, StoreError> {
    let dir = home.join(".quotedeck");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
        set_dir_permissions(&dir)?;
    }
    Ok(dir)
}

/// `<home>/.quotedeck/quotes.json` — pure, no I/O.
pub fn quotes_path_at(home: &Path) -> PathBuf {
    home.join(".quotedeck").join("quotes.json")
}

fn selected_category_path_at(home: &Path) -> PathBuf {
    home.join(".quotedeck").join("selected_category")
}

fn last_viewed_path_at(home: &Path) -> PathBuf {
    home.join(".quotedeck").join("run").join("last_viewed")
}

// ---------------------------------------------------------------------------
// 2. Seed data
// ---------------------------------------------------------------------------

/// Built-in quotes used when no store has ever been saved.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "The journey of a thousand miles begins with one step.".to_string(),
            category: CategoryName::from("Motivation"),
        },
        Quote {
            text: "Life is what happens when you're busy making other plans.".to_string(),
            category: CategoryName::from("Life"),
        },
        Quote {
            text: "Happiness depends upon ourselves.".to_string(),
            category: CategoryName::from("Happiness"),
        },
    ]
}

// ---------------------------------------------------------------------------
// 3. Load / save
// ---------------------------------------------------------------------------

/// Load the collection from `<home>/.quotedeck/quotes.json`.
///
/// A missing file is not an error: a fresh store starts from
/// [`seed_quotes`]. Malformed JSON yields `StoreError::Parse` with the
/// offending path.
pub fn load_quotes_at(home: &Path) -> Result<QuoteBook, StoreError> {
    let path = quotes_path_at(home);
    if !path.exists() {
        return Ok(QuoteBook::new(seed_quotes()));
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    let quotes: Vec<Quote> =
        serde_json::from_str(&contents).map_err(|e| StoreError::Parse { path, source: e })?;
    Ok(QuoteBook::new(quotes))
}

/// `load_quotes_at` convenience wrapper.
pub fn load_quotes() -> Result<QuoteBook, StoreError> {
    load_quotes_at(&home()?)
}

/// Atomically save the full collection to `<home>/.quotedeck/quotes.json`.
///
/// Write flow: serialize → `.json.tmp` sibling → `chmod 0600` → `rename`.
pub fn save_quotes_at(home: &Path, book: &QuoteBook) -> Result<(), StoreError> {
    deck_dir_at(home)?;
    let path = quotes_path_at(home);
    let tmp = path.with_extension("json.tmp");

    let json = serde_json::to_string_pretty(book.quotes())?;
    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    set_file_permissions(&tmp)?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(())
}

/// `save_quotes_at` convenience wrapper.
pub fn save_quotes(book: &QuoteBook) -> Result<(), StoreError> {
    save_quotes_at(&home()?, book)
}

// ---------------------------------------------------------------------------
// 4. Category filter
// ---------------------------------------------------------------------------

/// Load the persisted category filter. `None` means unfiltered: the file is
/// absent, empty, or holds the literal [`ALL_CATEGORIES`].
pub fn load_selected_category_at(home: &Path) -> Result<Option<CategoryName>, StoreError> {
    let path = selected_category_path_at(home);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    // Whitespace is significant to dedup, so only a trailing newline is
    // stripped; "Life " and "Life" are different filters.
    let name = contents.strip_suffix('\n').unwrap_or(&contents);
    if name.is_empty() || name == ALL_CATEGORIES {
        return Ok(None);
    }
    Ok(Some(CategoryName::from(name)))
}

/// `load_selected_category_at` convenience wrapper.
pub fn load_selected_category() -> Result<Option<CategoryName>, StoreError> {
    load_selected_category_at(&home()?)
}

/// Persist the category filter; `None` records [`ALL_CATEGORIES`].
pub fn save_selected_category_at(
    home: &Path,
    category: Option<&CategoryName>,
) -> Result<(), StoreError> {
    deck_dir_at(home)?;
    let path = selected_category_path_at(home);
    let value = category.map(|c| c.0.as_str()).unwrap_or(ALL_CATEGORIES);
    std::fs::write(&path, value).map_err(|e| io_err(&path, e))?;
    Ok(())
}

/// `save_selected_category_at` convenience wrapper.
pub fn save_selected_category(category: Option<&CategoryName>) -> Result<(), StoreError> {
    save_selected_category_at(&home()?, category)
}

// ---------------------------------------------------------------------------
// 5. Session note (last viewed quote)
// ---------------------------------------------------------------------------

/// Read the most recently displayed quote's rendered text, if any.
/// Callers treat this as best-effort; an unreadable note is `None`.
pub fn load_last_viewed_at(home: &Path) -> Option<String> {
    let path = last_viewed_path_at(home);
    let contents = std::fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Record the rendered text of the quote just displayed.
/// Callers treat this as best-effort; a failed write never fails a command.
pub fn save_last_viewed_at(home: &Path, rendered: &str) -> Result<(), StoreError> {
    let path = last_viewed_path_at(home);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    std::fs::write(&path, rendered).map_err(|e| io_err(&path, e))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, StoreError> {
    dirs::home_dir().ok_or(StoreError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| io_err(path, e))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
