//! Pocket files: a bag of dice saved as JSON.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bag::{BagSnapshot, DiceBag};
use crate::error::{PocketError, PocketResult};

/// Current pocket file format version.
pub const POCKET_FILE_VERSION: u32 = 1;

/// On-disk layout of a pocket file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PocketFile {
    /// Format version; must equal [`POCKET_FILE_VERSION`].
    pub version: u32,
    /// When the file was written.
    pub saved_at: DateTime<Utc>,
    /// The bag itself.
    pub bag: BagSnapshot,
}

impl PocketFile {
    /// Wrap a bag for saving now.
    pub fn new(bag: &DiceBag) -> Self {
        Self {
            version: POCKET_FILE_VERSION,
            saved_at: Utc::now(),
            bag: bag.snapshot(),
        }
    }
}

/// Write `bag` to `path`. The file is replaced only once the new contents
/// are fully on disk.
pub fn save_bag(bag: &DiceBag, path: &Path) -> PocketResult<()> {
    let json = serde_json::to_string_pretty(&PocketFile::new(bag)).map_err(|e| {
        PocketError::Format {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    let staging = staging_path(path);
    let write_err = |source| PocketError::Write {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&staging, json).map_err(write_err)?;
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(write_err(e));
    }

    info!(path = %path.display(), dice = bag.len(), "saved pocket");
    Ok(())
}

/// Read a bag from `path`.
pub fn load_bag(path: &Path) -> PocketResult<DiceBag> {
    let content = fs::read_to_string(path).map_err(|source| PocketError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format_err = |reason: String| PocketError::Format {
        path: path.to_path_buf(),
        reason,
    };

    let file: PocketFile = serde_json::from_str(&content).map_err(|e| format_err(e.to_string()))?;
    if file.version != POCKET_FILE_VERSION {
        return Err(format_err(format!(
            "unsupported version {} (expected {POCKET_FILE_VERSION})",
            file.version
        )));
    }
    let bag = DiceBag::try_from(file.bag).map_err(|e| format_err(e.to_string()))?;

    debug!(path = %path.display(), dice = bag.len(), saved_at = %file.saved_at, "loaded pocket");
    Ok(bag)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rolled_bag() -> DiceBag {
        let mut bag = DiceBag::with_seed("Main Bag", 9);
        let ids = bag.get_dice(6, 2).unwrap();
        bag.roll(ids[0], "ana").unwrap();
        bag.roll(ids[1], "bo").unwrap();
        bag.die_mut(ids[1]).unwrap().set_nickname("Stubborn");
        bag
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pocket.json");
        let bag = rolled_bag();
        save_bag(&bag, &path).unwrap();
        let loaded = load_bag(&path).unwrap();
        assert_eq!(loaded.snapshot(), bag.snapshot());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn loaded_dice_continue_their_sequence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pocket.json");
        let mut bag = rolled_bag();
        save_bag(&bag, &path).unwrap();
        let mut loaded = load_bag(&path).unwrap();
        let id = bag.dice().next().unwrap().id();
        assert_eq!(bag.roll(id, "ana").unwrap(), loaded.roll(id, "ana").unwrap());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_bag(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PocketError::Read { .. }));
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pocket.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_bag(&path), Err(PocketError::Format { .. })));
    }

    #[test]
    fn wrong_version_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pocket.json");
        let mut file = PocketFile::new(&rolled_bag());
        file.version = 99;
        fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();
        match load_bag(&path) {
            Err(PocketError::Format { reason, .. }) => assert!(reason.contains("99")),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_die_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pocket.json");
        let mut file = PocketFile::new(&rolled_bag());
        file.bag.dice[0].sides = 0;
        fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();
        assert!(matches!(load_bag(&path), Err(PocketError::Format { .. })));
    }

    #[test]
    fn unwritable_location_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("pocket.json");
        assert!(matches!(
            save_bag(&rolled_bag(), &path),
            Err(PocketError::Write { .. })
        ));
    }
}
