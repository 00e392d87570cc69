//! JSON document export and import.
//!
//! Export writes the full collection as a pretty-printed JSON array. Import
//! accepts any JSON array, drops records that fail boundary validation, and
//! leaves the merge (and therefore deduplication) to the caller's
//! [`QuoteBook::merge`].

use std::path::Path;

use serde_json::Value;

use crate::book::QuoteBook;
use crate::error::{io_err, StoreError};
use crate::types::{Quote, RawQuote};

/// Serialize the full collection to `path` as a pretty-printed JSON array.
pub fn export_to_path(path: &Path, book: &QuoteBook) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(book.quotes())?;
    std::fs::write(path, json).map_err(|e| io_err(path, e))?;
    Ok(())
}

/// Read an import document and return the validated candidate records.
///
/// The file must parse as a JSON array; anything else is
/// [`StoreError::MalformedImport`] and nothing is merged. Individual records
/// that are not objects or lack a non-empty `text` and `category` are dropped
/// silently; the rest are returned in document order.
pub fn read_import(path: &Path) -> Result<Vec<Quote>, StoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let document: Value = serde_json::from_str(&contents).map_err(|_| {
        StoreError::MalformedImport {
            path: path.to_path_buf(),
        }
    })?;
    let Some(entries) = document.as_array() else {
        return Err(StoreError::MalformedImport {
            path: path.to_path_buf(),
        });
    };

    let mut quotes = Vec::new();
    for entry in entries {
        let Ok(raw) = serde_json::from_value::<RawQuote>(entry.clone()) else {
            continue;
        };
        if let Ok(quote) = Quote::try_from(raw) {
            quotes.push(quote);
        }
    }
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn quote(text: &str, category: &str) -> Quote {
        Quote::new(text, category).expect("valid quote")
    }

    #[test]
    fn export_then_import_returns_same_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        let book = QuoteBook::new(vec![quote("A", "cat1"), quote("B", "cat2")]);

        export_to_path(&path, &book).expect("export");
        let imported = read_import(&path).expect("import");
        assert_eq!(imported, book.quotes());
    }

    #[test]
    fn exported_roundtrip_is_a_content_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        let mut book = QuoteBook::new(vec![quote("A", "cat1"), quote("B", "cat2")]);

        export_to_path(&path, &book).expect("export");
        let imported = read_import(&path).expect("import");
        let appended = book.merge(imported);
        assert_eq!(appended, 0, "every exported entry is already present");
    }

    #[test]
    fn non_json_import_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        let err = read_import(&path).unwrap_err();
        assert!(matches!(err, StoreError::MalformedImport { .. }));
    }

    #[test]
    fn non_array_import_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("object.json");
        std::fs::write(&path, r#"{"text":"Q","category":"cat"}"#).unwrap();
        let err = read_import(&path).unwrap_err();
        assert!(matches!(err, StoreError::MalformedImport { .. }));
    }

    #[test]
    fn records_missing_fields_are_dropped_silently() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(
            &path,
            r#"[{"text":"Q"},{"category":"cat"},{"text":"ok","category":"cat"},42]"#,
        )
        .unwrap();
        let imported = read_import(&path).expect("import");
        assert_eq!(imported, vec![quote("ok", "cat")]);
    }

    #[test]
    fn empty_array_imports_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(read_import(&path).expect("import").is_empty());
    }
}
