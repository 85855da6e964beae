//! rcd CLI
//!
//! Keeps a directory and an rclone remote in sync through a small
//! metadata record stored in `.rcd/`.
//!
//! Exit status: 0 on success, 1 on a reported failure, -1 when the
//! command line matches no verb.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;

use clap::Parser;
use clap::error::ErrorKind;
use rcd_core::Rclone;
use tracing::error;

use cli::{Cli, Verb};
use error::{CliError, ExitStatus};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let status = run().await;
    std::process::exit(status.code());
}

async fn run() -> ExitStatus {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitStatus::Success;
        }
        Err(_) => return ExitStatus::Unrecognized,
    };

    let verb = Verb::parse(&cli.args);
    if verb == Verb::Unrecognized {
        return CliError::Unrecognized.exit_status();
    }

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("failed to initialize logging: {}", e);
    }

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            report(&CliError::from(e));
            return ExitStatus::Failure;
        }
    };

    match commands::execute(verb, cwd, Rclone::new(cli.rclone)).await {
        Ok(()) => ExitStatus::Success,
        Err(e) => {
            report(&e);
            e.exit_status()
        }
    }
}

fn report(e: &CliError) {
    if matches!(e, CliError::Unrecognized) {
        return;
    }
    if e.is_precondition() {
        error!("{}", e);
    } else {
        error!(critical = true, "{}", e);
    }
}
