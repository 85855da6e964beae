//! Installing a reconciled record on disk
//!
//! After a merge the repo briefly holds two metadata directories: `.rcd`
//! and the fetched `.rcd-remote`. [`apply`] collapses them back to one.
//!
//! Steps, each fatal on failure:
//!
//! 1. If the remote won: `.rcd` → `.rcd-old`, then `.rcd-remote` → `.rcd`.
//! 2. Write the merged record into `.rcd`.
//! 3. Remove `.rcd-old` (remote won) or `.rcd-remote` (otherwise).
//!
//! There is always a `.rcd` on disk. An interruption leaves a leftover
//! directory that blocks the next run until the operator removes it.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result, TransitionStep};
use crate::merge::{Direction, MergeOutcome};
use crate::store::RepoStore;

/// Make `outcome` the single authoritative local record.
pub fn apply(store: &RepoStore, outcome: &MergeOutcome) -> Result<()> {
    let layout = store.layout();
    let metadata = layout.metadata_dir();
    let staging = layout.staging_dir();
    let backup = layout.backup_dir();

    let obsolete = if outcome.direction == Direction::RemoteWins {
        rename(&metadata, &backup, TransitionStep::Retire)?;
        rename(&staging, &metadata, TransitionStep::Promote)?;
        info!("Adopted remote metadata");
        backup
    } else {
        staging
    };

    store.save_local(&outcome.config)?;
    debug!(timestamp = %outcome.config.timestamp, "merged config written");

    fs::remove_dir_all(&obsolete).map_err(|source| Error::Transition {
        step: TransitionStep::Cleanup,
        path: obsolete.clone(),
        source,
    })?;
    debug!(path = %obsolete.display(), "removed obsolete metadata");

    Ok(())
}

fn rename(from: &Path, to: &Path, step: TransitionStep) -> Result<()> {
    debug!(from = %from.display(), to = %to.display(), "{}", step);
    fs::rename(from, to).map_err(|source| Error::Transition {
        step,
        path: from.to_path_buf(),
        source,
    })
}
