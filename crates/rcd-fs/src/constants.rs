//! Reserved names inside a tracked directory.

use std::path::Path;

/// Reserved filesystem names used by rcd.
///
/// None of these are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoPath {
    /// The `.rcd` directory. Its presence marks a directory as tracked.
    MetadataDir,
    /// The `.rcd-remote` directory holding freshly fetched remote metadata
    StagingDir,
    /// The `.rcd-old` directory holding retired local metadata during a swap
    BackupDir,
    /// The `conf.json` record inside any of the directories above
    ConfigFile,
}

impl RepoPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MetadataDir => ".rcd",
            Self::StagingDir => ".rcd-remote",
            Self::BackupDir => ".rcd-old",
            Self::ConfigFile => "conf.json",
        }
    }
}

impl AsRef<Path> for RepoPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
