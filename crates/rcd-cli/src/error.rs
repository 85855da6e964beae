//! Error types for rcd-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from rcd-core
    #[error(transparent)]
    Core(#[from] rcd_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The command line matched no verb
    #[error("unrecognized command line")]
    Unrecognized,
}

impl CliError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::Unrecognized => ExitStatus::Unrecognized,
            _ => ExitStatus::Failure,
        }
    }

    /// Precondition failures are reported plainly; everything else is critical.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_precondition())
    }
}

/// Process exit status of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// A failure that was already reported to the operator
    Failure,
    /// The command line matched no verb
    Unrecognized,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Unrecognized => -1,
        }
    }
}
