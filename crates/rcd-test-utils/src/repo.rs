//! [`TestRepo`] builder for rcd test scenarios.
//!
//! Documents are written as raw JSON so fixtures do not depend on the
//! crates under test.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A config document with the given remote and RFC 3339 timestamp,
/// the default update strategy, and the `.gitignore` marker rule.
pub fn config_json(remote: &str, timestamp: &str) -> String {
    serde_json::json!({
        "remote": remote,
        "timestamp": timestamp,
        "updateStrategy": "modTime",
        "trackRenames": false,
        "exclusions": [
            { "type": "excludeDirIfMarkerPresent", "pattern": ".gitignore" }
        ]
    })
    .to_string()
}

/// A temporary directory with helpers for rcd fixtures.
///
/// # Example
///
/// ```rust,no_run
/// use rcd_test_utils::repo::{TestRepo, config_json};
///
/// let remote = TestRepo::new();
/// let local = TestRepo::new();
/// local.write_config(".rcd", &config_json(remote.root_str(), "2024-01-01T00:00:00Z"));
/// local.assert_exists(".rcd/conf.json");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root as a string, for use as a remote location.
    pub fn root_str(&self) -> &str {
        self.root().to_str().expect("temp dir path is not UTF-8")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Write a config document as `<dir>/conf.json`.
    pub fn write_config(&self, dir: &str, json: &str) {
        self.write(&format!("{}/conf.json", dir), json);
    }

    pub fn mkdir(&self, rel: &str) {
        fs::create_dir_all(self.path(rel)).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Parse the config document in `<dir>/conf.json`.
    pub fn read_config(&self, dir: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(&format!("{}/conf.json", dir))).unwrap()
    }

    /// Assert that `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected path to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_missing(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}
