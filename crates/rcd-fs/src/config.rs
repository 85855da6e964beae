//! JSON metadata loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{Error, Result, io};

/// Loads and saves JSON documents.
///
/// Saving always replaces the whole document.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a document from a file.
    ///
    /// A missing file surfaces as [`Error::Io`], malformed content as
    /// [`Error::ConfigParse`].
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        debug!(path = %path.display(), bytes = content.len(), "loaded config");
        serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save a document to a file, replacing any previous content.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        content.push('\n');

        io::write_atomic(path, content.as_bytes())?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
