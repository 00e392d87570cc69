//! Sync-state sidecar.
//!
//! Persists a [`SyncState`] JSON document at
//! `<home>/.quotedeck/sync_state.json`, recording the last pass that admitted
//! new quotes. Writes use the same atomic `.tmp` + rename pattern as the
//! quote store. Read by `quotedeck status`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quotedeck_core::store;

use crate::error::{io_err, SyncError};

/// On-disk record of the last successful reconciliation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncState {
    pub synced_at: DateTime<Utc>,
    /// Records admitted by that pass.
    pub appended: usize,
    /// Collection size after that pass.
    pub total: usize,
}

/// `<home>/.quotedeck/sync_state.json` — pure, no I/O.
pub fn state_path_at(home: &Path) -> PathBuf {
    home.join(".quotedeck").join("sync_state.json")
}

/// Load the sidecar. Returns `None` if no pass has ever been recorded.
pub fn load_at(home: &Path) -> Result<Option<SyncState>, SyncError> {
    let path = state_path_at(home);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Save the sidecar atomically: `.tmp` sibling, then rename.
///
/// The deck directory is created through the store helper so a sync pass on
/// a fresh home gets the same restricted mode as the quote store.
pub fn save_at(home: &Path, state: &SyncState) -> Result<(), SyncError> {
    store::deck_dir_at(home)?;
    let path = state_path_at(home);

    let json = serde_json::to_string_pretty(state)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn none_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_at(tmp.path()).unwrap(), None);
    }

    #[test]
    fn roundtrip_save_load() {
        let tmp = TempDir::new().unwrap();
        let state = SyncState {
            synced_at: Utc::now(),
            appended: 2,
            total: 7,
        };
        save_at(tmp.path(), &state).unwrap();
        let loaded = load_at(tmp.path()).unwrap().expect("state present");
        assert_eq!(loaded.appended, 2);
        assert_eq!(loaded.total, 7);
    }

    #[cfg(unix)]
    #[test]
    fn save_creates_deck_dir_with_restricted_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let state = SyncState {
            synced_at: Utc::now(),
            appended: 1,
            total: 4,
        };
        save_at(tmp.path(), &state).unwrap();

        let dir = tmp.path().join(".quotedeck");
        let mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700, "fresh deck dir must be owner-only");
    }

    #[test]
    fn tmp_file_cleaned_up_after_save() {
        let tmp = TempDir::new().unwrap();
        let state = SyncState {
            synced_at: Utc::now(),
            appended: 0,
            total: 3,
        };
        save_at(tmp.path(), &state).unwrap();
        let tmp_path = state_path_at(tmp.path()).with_extension("json.tmp");
        assert!(
            !tmp_path.exists(),
            "tmp file should be removed after atomic rename"
        );
    }
}
