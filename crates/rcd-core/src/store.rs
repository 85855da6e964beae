//! Metadata record access for one tracked directory

use rcd_fs::{ConfigStore, RepoLayout, RepoPath};

use crate::config::RepoConfig;
use crate::error::{ConfigSide, Error, Result};

/// Loads and saves [`RepoConfig`] records under a repo root.
///
/// Pure data access; reconciliation lives in [`crate::merge`].
#[derive(Debug, Clone)]
pub struct RepoStore {
    layout: RepoLayout,
    store: ConfigStore,
}

impl RepoStore {
    pub fn new(layout: RepoLayout) -> Self {
        Self {
            layout,
            store: ConfigStore::new(),
        }
    }

    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    /// The authoritative local record in `.rcd`.
    pub fn load_local(&self) -> Result<RepoConfig> {
        self.load(RepoPath::MetadataDir, ConfigSide::Local)
    }

    /// A remote record fetched into `dir`.
    pub fn load_fetched(&self, dir: RepoPath) -> Result<RepoConfig> {
        self.load(dir, ConfigSide::Remote)
    }

    /// Replace the local record in `.rcd`.
    pub fn save_local(&self, config: &RepoConfig) -> Result<()> {
        let path = self.layout.config_file(RepoPath::MetadataDir);
        self.store
            .save(&path, config)
            .map_err(|source| Error::ConfigWrite { source })
    }

    fn load(&self, dir: RepoPath, side: ConfigSide) -> Result<RepoConfig> {
        let path = self.layout.config_file(dir);
        self.store
            .load(&path)
            .map_err(|source| Error::ConfigRead { side, source })
    }
}
