//! Core orchestration layer for rcd
//!
//! Reconciles a local and a remote metadata record, makes the outcome
//! durable on disk, and drives rclone in the resulting direction.
//!
//! # Components
//!
//! - [`config`]: the [`RepoConfig`] record and its rclone rendering
//! - [`store`]: loading and saving records for one tracked directory
//! - [`merge`]: deciding which record is authoritative
//! - [`transition`]: swapping metadata directories to install the outcome
//! - [`transfer`]: the rclone subprocess seam
//! - [`prompt`]: operator confirmation between dry run and real transfer
//! - [`orchestrator`]: building and running a two-phase transfer
//! - [`driver`]: the verbs `init`, `clone`, `push`, `pull` and `sync`

pub mod config;
pub mod driver;
pub mod error;
pub mod merge;
pub mod orchestrator;
pub mod prompt;
pub mod store;
pub mod transfer;
pub mod transition;

pub use config::{ExclusionRule, RepoConfig, UpdateStrategy};
pub use driver::Driver;
pub use error::{Error, Result};
pub use merge::{Direction, MergeOutcome, merge};
pub use orchestrator::{Location, Orchestrator, SyncOutcome};
pub use prompt::{Confirmation, Prompt, ReaderPrompt};
pub use store::RepoStore;
pub use transfer::{Rclone, TransferStatus, TransferTool};
