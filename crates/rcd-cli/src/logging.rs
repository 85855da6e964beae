use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set. Otherwise the level is `info`, or `trace`
/// with `--verbose` so every rclone command line is shown.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "trace" } else { "info" };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{error, info, trace};

    #[test]
    fn test_logging_init() {
        // Only the first init in a process succeeds
        let _ = init(true);

        trace!("rclone sync . remote: --dry-run");
        info!("Config updated.");
        error!(critical = true, "Failed to write local config");
    }
}
