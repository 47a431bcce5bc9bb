//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use jot::domain::Note;
use jot::store::{FileStorage, STORAGE_KEY, Storage, decode_notes, encode_notes};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// The directory is removed when the TestEnv is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Creates a new isolated test environment with no stored notes.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding the serialized collection.
    pub fn data_file(&self) -> PathBuf {
        FileStorage::new(&self.data_dir)
            .path_for(STORAGE_KEY)
            .expect("storage key should be valid")
    }

    /// Replaces the stored collection with `notes`, in the given order.
    pub fn seed(&self, notes: &[TestNote]) {
        let notes: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        let raw = encode_notes(&notes).expect("Failed to encode notes");
        self.write_raw(&raw);
    }

    /// Writes `raw` to the data file verbatim.
    pub fn write_raw(&self, raw: &str) {
        FileStorage::new(&self.data_dir)
            .set(STORAGE_KEY, raw)
            .expect("Failed to write data file");
    }

    /// Reads back and decodes the stored collection.
    pub fn stored_notes(&self) -> Vec<Note> {
        let raw = FileStorage::new(&self.data_dir)
            .get(STORAGE_KEY)
            .expect("Failed to read data file")
            .unwrap_or_else(|| "[]".to_string());
        decode_notes(&raw).expect("Stored notes should decode")
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().dir(&self.data_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
