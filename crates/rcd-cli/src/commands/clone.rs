//! Clone command implementation

use colored::Colorize;

use super::ConsoleDriver;
use crate::error::Result;

/// Copy `remote` into a new directory.
pub async fn run_clone(
    driver: &mut ConsoleDriver,
    remote: &str,
    local_name: Option<&str>,
) -> Result<()> {
    println!("{} Cloning {}...", "=>".blue().bold(), remote.cyan());

    let destination = driver.clone_remote(remote, local_name).await?;

    println!(
        "{} Cloned into {}",
        "OK".green().bold(),
        destination.display().to_string().cyan()
    );
    Ok(())
}
