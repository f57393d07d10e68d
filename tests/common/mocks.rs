//! Mock implementations for test fixtures.
//!
//! Re-exports the recording dispatcher from `sku_selector::adapters::mock`
//! and provides scenario files on disk for CLI tests.

pub use sku_selector::adapters::mock::RecordingDispatch;

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// A scenario JSON file inside a temporary directory.
///
/// The directory is removed when the value is dropped.
pub struct ScenarioFile {
    _dir: TempDir,
    path: PathBuf,
}

impl ScenarioFile {
    pub fn new(json: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("scenario.json");
        let mut file = std::fs::File::create(&path).expect("create scenario file");
        file.write_all(json.as_bytes()).expect("write scenario file");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
