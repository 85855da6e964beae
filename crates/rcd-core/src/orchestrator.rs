//! Two-phase rclone transfers
//!
//! Every transfer runs as a dry run first. The real transfer only starts
//! once the operator confirms.

use std::path::Path;

use rcd_fs::RepoPath;
use tracing::{info, warn};

use crate::config::RepoConfig;
use crate::error::{Error, Result};
use crate::prompt::{Confirmation, Prompt};
use crate::transfer::TransferTool;

pub const PROGRESS_FLAG: &str = "-P";
pub const CREATE_EMPTY_DIRS_FLAG: &str = "--create-empty-src-dirs";
pub const TRACK_RENAMES_FLAG: &str = "--track-renames";
pub const DRY_RUN_FLAG: &str = "--dry-run";
pub const INTERACTIVE_FLAG: &str = "--interactive";

pub const CONFIRM_MESSAGE: &str = "Dry run completed. Type c/i/q to [C]ontinue (default), use [i]nteractive mode, or [q]uit (any other input).";

/// Filter keeping the metadata directory part of every transfer.
///
/// Appended after the user's exclusions.
pub fn metadata_filter() -> String {
    format!("+ /{}/**", RepoPath::MetadataDir)
}

/// One end of a transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The repo root, the tool's working directory
    Local,
    /// A remote as rclone names it
    Remote(String),
}

impl Location {
    pub fn to_arg(&self) -> String {
        match self {
            Self::Local => ".".to_string(),
            Self::Remote(remote) => remote.clone(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "."),
            Self::Remote(remote) => write!(f, "{}", remote),
        }
    }
}

/// How a two-phase transfer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Transferred,
    TransferredInteractively,
    /// The operator declined after the dry run
    Declined,
}

/// Build the rclone `sync` arguments for `config`, without the dry-run flag.
pub fn build_args(config: &RepoConfig, source: &Location, destination: &Location) -> Vec<String> {
    let mut args = vec![
        "sync".to_string(),
        source.to_arg(),
        destination.to_arg(),
        config.update_strategy.flag().to_string(),
        PROGRESS_FLAG.to_string(),
        CREATE_EMPTY_DIRS_FLAG.to_string(),
    ];
    if config.track_renames {
        args.push(TRACK_RENAMES_FLAG.to_string());
    }
    args.extend(config.exclusions.iter().flat_map(|rule| rule.to_args()));
    args.push("--filter".to_string());
    args.push(metadata_filter());
    args
}

/// Runs dry-run-then-confirm transfers for one repo root.
pub struct Orchestrator<'a, T, P> {
    tool: &'a T,
    prompt: &'a mut P,
    workdir: &'a Path,
}

impl<'a, T: TransferTool, P: Prompt> Orchestrator<'a, T, P> {
    pub fn new(tool: &'a T, prompt: &'a mut P, workdir: &'a Path) -> Self {
        Self {
            tool,
            prompt,
            workdir,
        }
    }

    /// Transfer from `source` to `destination` as `config` describes.
    ///
    /// Declining at the prompt is a successful outcome, not an error.
    pub async fn run_sync(
        &mut self,
        config: &RepoConfig,
        source: &Location,
        destination: &Location,
    ) -> Result<SyncOutcome> {
        info!("Calling rclone; {} => {}", source, destination);
        let args = build_args(config, source, destination);

        let mut dry_run = args.clone();
        dry_run.push(DRY_RUN_FLAG.to_string());
        self.invoke("dry run", &dry_run).await?;

        let answer = self.prompt.ask(CONFIRM_MESSAGE);
        match Confirmation::parse(answer.as_deref()) {
            Confirmation::Continue => {
                self.invoke("sync", &args).await?;
                Ok(SyncOutcome::Transferred)
            }
            Confirmation::Interactive => {
                let mut interactive = args;
                interactive.push(INTERACTIVE_FLAG.to_string());
                self.invoke("sync", &interactive).await?;
                Ok(SyncOutcome::TransferredInteractively)
            }
            Confirmation::Decline => {
                info!("Transfer declined, nothing changed");
                Ok(SyncOutcome::Declined)
            }
        }
    }

    async fn invoke(&self, operation: &str, args: &[String]) -> Result<()> {
        let status = self.tool.run(self.workdir, args).await?;
        if status.is_success() {
            return Ok(());
        }
        warn!(%status, "rclone {} failed", operation);
        Err(Error::TransferFailed {
            operation: operation.to_string(),
            status: status.to_string(),
        })
    }
}
