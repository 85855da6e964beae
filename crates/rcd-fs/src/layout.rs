//! On-disk layout of a tracked directory
//!
//! Every path rcd touches is derived from one explicit root, so nothing
//! depends on the process working directory.

use std::path::{Path, PathBuf};

use crate::RepoPath;

/// The reserved paths of one tracked directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    root: PathBuf,
}

impl RepoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a reserved entry directly under the root.
    pub fn path(&self, entry: RepoPath) -> PathBuf {
        self.root.join(entry.as_str())
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.path(RepoPath::MetadataDir)
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.path(RepoPath::StagingDir)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.path(RepoPath::BackupDir)
    }

    /// The config record inside one of the reserved directories.
    pub fn config_file(&self, dir: RepoPath) -> PathBuf {
        self.path(dir).join(RepoPath::ConfigFile.as_str())
    }

    /// The metadata directory marks a directory as tracked.
    pub fn is_tracked(&self) -> bool {
        self.metadata_dir().is_dir()
    }

    /// Reserved directories left behind by an interrupted run.
    ///
    /// Staging first, then backup.
    pub fn leftovers(&self) -> Vec<RepoPath> {
        [RepoPath::StagingDir, RepoPath::BackupDir]
            .into_iter()
            .filter(|entry| self.path(*entry).exists())
            .collect()
    }
}
