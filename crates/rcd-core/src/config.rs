//! The per-directory metadata record
//!
//! A [`RepoConfig`] is stored as `.rcd/conf.json` and is replaced as a whole
//! whenever it changes. Values are never edited in place; [`RepoConfig::with_timestamp`]
//! produces the updated copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker file whose presence excludes a directory by default.
pub const DEFAULT_EXCLUDE_MARKER: &str = ".gitignore";

/// How rclone decides that a file changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateStrategy {
    /// Compare checksums
    Checksum,
    /// Compare modification times, skipping newer files on the destination
    #[default]
    ModTime,
    /// Compare sizes only
    SizeOnly,
}

impl UpdateStrategy {
    /// The rclone flag selecting this strategy.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Checksum => "--checksum",
            Self::ModTime => "--update",
            Self::SizeOnly => "--size-only",
        }
    }
}

/// A single rclone filtering rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "pattern", rename_all = "camelCase")]
pub enum ExclusionRule {
    /// Include or exclude files matching a filter pattern (`+ *.jpg`, `- tmp/**`)
    PatternFilter(String),
    /// Read filter patterns from a file
    PatternFile(String),
    /// Exclude a directory if it contains the named marker file
    ExcludeDirIfMarkerPresent(String),
}

impl ExclusionRule {
    pub fn flag(&self) -> &'static str {
        match self {
            Self::PatternFilter(_) => "--filter",
            Self::PatternFile(_) => "--filter-from",
            Self::ExcludeDirIfMarkerPresent(_) => "--exclude-if-present",
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            Self::PatternFilter(p) | Self::PatternFile(p) | Self::ExcludeDirIfMarkerPresent(p) => p,
        }
    }

    /// Render as rclone arguments: the flag, then the value as written.
    ///
    /// Quoting happens only when the arguments are shown as one line; see
    /// [`crate::transfer::command_line`].
    pub fn to_args(&self) -> [String; 2] {
        [self.flag().to_string(), self.pattern().to_string()]
    }
}

/// Wrap a value in double quotes when it contains whitespace.
///
/// Used when arguments are flattened into one command line, so a value
/// with spaces still reads as a single token.
pub fn quote(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// Metadata record of a tracked directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoConfig {
    /// Paired remote location, anything rclone understands
    pub remote: String,
    /// When the record was last authoritatively updated
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub update_strategy: UpdateStrategy,
    #[serde(default)]
    pub track_renames: bool,
    #[serde(default)]
    pub exclusions: Vec<ExclusionRule>,
}

impl RepoConfig {
    /// A fresh record as written by `init`, stamped with the current time.
    pub fn new(remote: impl Into<String>) -> Self {
        Self::created_at(remote, Utc::now())
    }

    pub fn created_at(remote: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            remote: remote.into(),
            timestamp,
            update_strategy: UpdateStrategy::default(),
            track_renames: false,
            exclusions: vec![ExclusionRule::ExcludeDirIfMarkerPresent(
                DEFAULT_EXCLUDE_MARKER.to_string(),
            )],
        }
    }

    /// Copy of this record with only the timestamp replaced.
    pub fn with_timestamp(&self, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }
}
