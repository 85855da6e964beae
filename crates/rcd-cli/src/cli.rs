//! CLI argument parsing
//!
//! clap handles the global flags. The verb words are matched by [`Verb::parse`]
//! so that every shape outside the supported ones maps to one explicit
//! [`Verb::Unrecognized`].

use std::path::PathBuf;

use clap::Parser;

/// rcd - keep a directory and an rclone remote in sync
#[derive(Parser, Debug)]
#[command(name = "rcd")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Commands:
  init <REMOTE>            Start tracking this directory against REMOTE
  clone <REMOTE> [NAME]    Copy REMOTE into a new directory
  push                     Send local state to the remote
  pull                     Replace local state with the remote's
  sync [DIR]               Reconcile and transfer from the newer side (default)")]
pub struct Cli {
    /// Log every rclone command line
    #[arg(short, long)]
    pub verbose: bool,

    /// rclone executable to invoke
    #[arg(long, env = "RCD_RCLONE", default_value = rcd_core::transfer::DEFAULT_PROGRAM, value_name = "PATH")]
    pub rclone: String,

    /// The command and its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// One invocation's verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Init {
        remote: String,
    },
    Clone {
        remote: String,
        local_name: Option<String>,
    },
    Push,
    Pull,
    /// Two-way sync of `target`, or of the current directory
    Sync {
        target: Option<PathBuf>,
    },
    Unrecognized,
}

impl Verb {
    pub fn parse(args: &[String]) -> Self {
        let words: Vec<&str> = args.iter().map(String::as_str).collect();
        match words.as_slice() {
            [] | ["sync"] => Self::Sync { target: None },
            ["sync", dir] => Self::Sync {
                target: Some(PathBuf::from(dir)),
            },
            ["init", remote] => Self::Init {
                remote: remote.to_string(),
            },
            ["clone", remote] => Self::Clone {
                remote: remote.to_string(),
                local_name: None,
            },
            ["clone", remote, name] => Self::Clone {
                remote: remote.to_string(),
                local_name: Some(name.to_string()),
            },
            ["push"] => Self::Push,
            ["pull"] => Self::Pull,
            ["init" | "clone"] => Self::Unrecognized,
            [dir] if !dir.starts_with('-') => Self::Sync {
                target: Some(PathBuf::from(dir)),
            },
            _ => Self::Unrecognized,
        }
    }
}
