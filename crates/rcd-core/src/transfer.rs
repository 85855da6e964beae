//! rclone subprocess seam
//!
//! The core only builds argument vectors and awaits an exit status; it never
//! parses the tool's output.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use crate::config::quote;
use crate::error::{Error, Result};

/// Program name used when none is configured.
pub const DEFAULT_PROGRAM: &str = "rclone";

/// Exit status of a finished transfer-tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferStatus {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl TransferStatus {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "status {}", code),
            None => write!(f, "a signal"),
        }
    }
}

impl From<std::process::ExitStatus> for TransferStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Something that can run a transfer-tool command to completion.
///
/// `args` holds one raw value per argv entry. Relative locations resolve
/// against `workdir`.
#[async_trait]
pub trait TransferTool: Send + Sync {
    async fn run(&self, workdir: &Path, args: &[String]) -> Result<TransferStatus>;
}

/// The real rclone binary.
#[derive(Debug, Clone)]
pub struct Rclone {
    program: String,
}

impl Default for Rclone {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Rclone {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl TransferTool for Rclone {
    async fn run(&self, workdir: &Path, args: &[String]) -> Result<TransferStatus> {
        trace!("{} {}", self.program, command_line(args));

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| Error::TransferSpawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(status.into())
    }
}

/// Flatten `args` into one command line for display.
///
/// Values containing whitespace are quoted so each stays visibly one
/// token. The argv passed to the tool is never built from this string.
pub fn command_line(args: &[String]) -> String {
    args.iter().map(|arg| quote(arg)).collect::<Vec<_>>().join(" ")
}
