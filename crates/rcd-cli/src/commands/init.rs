//! Init command implementation

use colored::Colorize;

use super::ConsoleDriver;
use crate::error::Result;

/// Start tracking the driver's root against `remote`.
pub async fn run_init(driver: &mut ConsoleDriver, remote: &str) -> Result<()> {
    println!(
        "{} Initializing repo against {}...",
        "=>".blue().bold(),
        remote.cyan()
    );

    let config = driver.init(remote).await?;

    println!(
        "{} Repo initialized (update strategy: {:?}).",
        "OK".green().bold(),
        config.update_strategy
    );
    Ok(())
}
