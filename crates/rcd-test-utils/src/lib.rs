//! Shared test utilities for the rcd workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`repo`]: [`TestRepo`](repo::TestRepo) builder for tracked directories
//!   and their remotes

pub mod repo;

pub use repo::{TestRepo, config_json};
