//! Push, pull, and sync command implementations
//!
//! All three end in a dry run followed by a confirmed transfer.

use colored::Colorize;
use rcd_core::SyncOutcome;

use super::ConsoleDriver;
use crate::error::Result;

/// Send local state to the remote.
pub async fn run_push(driver: &mut ConsoleDriver) -> Result<()> {
    println!("{} Pushing to remote...", "=>".blue().bold());
    let outcome = driver.push().await?;
    report(outcome);
    Ok(())
}

/// Replace local state with the remote's.
pub async fn run_pull(driver: &mut ConsoleDriver) -> Result<()> {
    println!("{} Pulling from remote...", "=>".blue().bold());
    let outcome = driver.pull().await?;
    report(outcome);
    Ok(())
}

/// Reconcile metadata and transfer from the authoritative side.
pub async fn run_sync(driver: &mut ConsoleDriver) -> Result<()> {
    println!(
        "{} Synchronizing {}...",
        "=>".blue().bold(),
        driver.root().display().to_string().cyan()
    );
    let outcome = driver.sync().await?;
    report(outcome);
    Ok(())
}

fn report(outcome: SyncOutcome) {
    match outcome {
        SyncOutcome::Transferred | SyncOutcome::TransferredInteractively => {
            println!("{} Transfer complete.", "OK".green().bold())
        }
        SyncOutcome::Declined => println!("{} Transfer skipped.", "--".yellow().bold()),
    }
}
