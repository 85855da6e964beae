//! Error types for rcd-core

use std::path::PathBuf;

use rcd_fs::RepoPath;

/// Result type for rcd-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which copy of the metadata record an operation addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSide {
    Local,
    Remote,
}

impl std::fmt::Display for ConfigSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// A step of installing a reconciled record on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// Moving the local metadata directory to the backup name
    Retire,
    /// Moving the staged remote metadata into place
    Promote,
    /// Removing the directory the swap made obsolete
    Cleanup,
}

impl std::fmt::Display for TransitionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Retire => write!(f, "retire local metadata"),
            Self::Promote => write!(f, "promote fetched metadata"),
            Self::Cleanup => write!(f, "remove obsolete metadata"),
        }
    }
}

/// Errors that can occur in rcd-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `init` found existing metadata
    #[error("Repo already exists at {path}")]
    RepoExists { path: PathBuf },

    /// No metadata directory under the root
    #[error("Repo not found at {path}")]
    RepoNotFound { path: PathBuf },

    /// A previous run left a reserved directory behind
    #[error("Repo at {path} is broken: leftover {leftover} directory, remove it to continue")]
    RepoBroken { path: PathBuf, leftover: RepoPath },

    /// `clone` destination already exists
    #[error("Destination {path} already exists")]
    CloneTargetExists { path: PathBuf },

    /// No directory name could be derived from a remote
    #[error("Cannot derive a local directory name from remote '{remote}'")]
    InvalidRemote { remote: String },

    #[error("Failed to read {side} config: {source}")]
    ConfigRead {
        side: ConfigSide,
        #[source]
        source: rcd_fs::Error,
    },

    #[error("Failed to write local config: {source}")]
    ConfigWrite {
        #[source]
        source: rcd_fs::Error,
    },

    #[error("Failed to {step} at {path}: {source}")]
    Transition {
        step: TransitionStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The transfer program could not be started
    #[error("Failed to run {program}: {source}")]
    TransferSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The transfer program ran but reported failure
    #[error("rclone {operation} exited with {status}")]
    TransferFailed { operation: String, status: String },

    #[error(transparent)]
    Fs(#[from] rcd_fs::Error),
}

impl Error {
    /// Precondition violations, as opposed to I/O or transfer failures
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::RepoExists { .. }
                | Self::RepoNotFound { .. }
                | Self::RepoBroken { .. }
                | Self::CloneTargetExists { .. }
                | Self::InvalidRemote { .. }
        )
    }
}
