//! Command implementations for rcd-cli

pub mod clone;
pub mod init;
pub mod sync;

use std::path::PathBuf;

use rcd_core::{Driver, Rclone};

use crate::cli::Verb;
use crate::error::{CliError, Result};
use crate::interactive::ConsolePrompt;

pub use clone::run_clone;
pub use init::run_init;
pub use sync::{run_pull, run_push, run_sync};

/// The driver every command runs through.
pub type ConsoleDriver = Driver<Rclone, ConsolePrompt>;

/// Run one recognized verb from `cwd`.
pub async fn execute(verb: Verb, cwd: PathBuf, rclone: Rclone) -> Result<()> {
    let root = match &verb {
        Verb::Sync {
            target: Some(target),
        } => cwd.join(target),
        _ => cwd,
    };
    let mut driver = Driver::new(root, rclone, ConsolePrompt::detect());

    match verb {
        Verb::Init { remote } => run_init(&mut driver, &remote).await,
        Verb::Clone { remote, local_name } => {
            run_clone(&mut driver, &remote, local_name.as_deref()).await
        }
        Verb::Push => run_push(&mut driver).await,
        Verb::Pull => run_pull(&mut driver).await,
        Verb::Sync { .. } => run_sync(&mut driver).await,
        Verb::Unrecognized => Err(CliError::Unrecognized),
    }
}
