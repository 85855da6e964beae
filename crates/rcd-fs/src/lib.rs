//! Filesystem layer for rcd
//!
//! Reserved directory names, the on-disk layout of a tracked directory,
//! and whole-document JSON storage for its metadata record.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod layout;

pub use config::ConfigStore;
pub use constants::RepoPath;
pub use error::{Error, Result};
pub use layout::RepoLayout;
