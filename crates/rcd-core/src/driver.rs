//! Verb implementations
//!
//! One [`Driver`] serves one invocation against one explicit root. It
//! assumes exclusive access to that root: nothing guards the reserved
//! directories against a second process running at the same time.

use std::fs;
use std::path::{Path, PathBuf};

use rcd_fs::{RepoLayout, RepoPath};
use tracing::{debug, info, warn};

use crate::config::RepoConfig;
use crate::error::{Error, Result, TransitionStep};
use crate::merge::{Direction, merge};
use crate::orchestrator::{Location, Orchestrator, SyncOutcome};
use crate::prompt::Prompt;
use crate::store::RepoStore;
use crate::transfer::TransferTool;
use crate::transition;

/// `<remote>/.rcd`, without doubling a trailing separator.
pub fn remote_metadata(remote: &str) -> String {
    if remote.ends_with('/') || remote.ends_with(':') {
        format!("{}{}", remote, RepoPath::MetadataDir)
    } else {
        format!("{}/{}", remote, RepoPath::MetadataDir)
    }
}

/// Directory name `clone` uses when none is given: the last segment of
/// the remote after a `/` or `:`.
pub fn clone_name(remote: &str) -> Option<&str> {
    remote
        .split(['/', ':'])
        .rev()
        .find(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
}

/// Runs the rcd verbs against a repo root.
pub struct Driver<T, P> {
    store: RepoStore,
    tool: T,
    prompt: P,
}

impl<T: TransferTool, P: Prompt> Driver<T, P> {
    pub fn new(root: impl Into<PathBuf>, tool: T, prompt: P) -> Self {
        Self {
            store: RepoStore::new(RepoLayout::new(root)),
            tool,
            prompt,
        }
    }

    pub fn layout(&self) -> &RepoLayout {
        self.store.layout()
    }

    pub fn root(&self) -> &Path {
        self.store.layout().root()
    }

    /// Start tracking the root against `remote` and upload the new metadata.
    pub async fn init(&mut self, remote: &str) -> Result<RepoConfig> {
        let layout = self.layout();
        let metadata = layout.metadata_dir();
        if metadata.exists() {
            return Err(Error::RepoExists {
                path: self.root().to_path_buf(),
            });
        }

        fs::create_dir_all(&metadata).map_err(|e| rcd_fs::Error::io(&metadata, e))?;
        let config = RepoConfig::new(remote);
        self.store.save_local(&config)?;
        info!(remote, "Repo initialized");

        let args = vec![
            "copy".to_string(),
            RepoPath::MetadataDir.to_string(),
            remote_metadata(&config.remote),
        ];
        self.transfer("upload metadata", &args).await?;
        Ok(config)
    }

    /// Copy `remote` into a new directory under the root.
    ///
    /// The remote's own metadata comes along as ordinary content; tracking
    /// is not set up here.
    pub async fn clone_remote(&mut self, remote: &str, local_name: Option<&str>) -> Result<PathBuf> {
        let name = match local_name {
            Some(name) => name,
            None => clone_name(remote).ok_or_else(|| Error::InvalidRemote {
                remote: remote.to_string(),
            })?,
        };
        let destination = self.root().join(name);
        if destination.exists() {
            return Err(Error::CloneTargetExists { path: destination });
        }

        info!("Cloning {} into {}", remote, destination.display());
        let args = vec!["copy".to_string(), remote.to_string(), name.to_string()];
        self.transfer("clone", &args).await?;
        Ok(destination)
    }

    /// Send local state to the remote without consulting the remote record.
    pub async fn push(&mut self) -> Result<SyncOutcome> {
        self.require_tracked()?;
        let config = self.store.load_local()?;
        let remote = Location::Remote(config.remote.clone());
        self.run_sync(&config, &Location::Local, &remote).await
    }

    /// Replace local metadata with the remote's and pull remote state.
    pub async fn pull(&mut self) -> Result<SyncOutcome> {
        self.require_clean()?;
        let local = self.store.load_local()?;

        let metadata = self.layout().metadata_dir();
        let backup = self.layout().backup_dir();
        fs::rename(&metadata, &backup).map_err(|source| Error::Transition {
            step: TransitionStep::Retire,
            path: metadata.clone(),
            source,
        })?;

        // On failure the backup stays for the operator to restore
        self.fetch_metadata(&local.remote, RepoPath::MetadataDir).await?;
        let fetched = self.store.load_fetched(RepoPath::MetadataDir)?;
        info!("Got remote config");

        fs::remove_dir_all(&backup).map_err(|source| Error::Transition {
            step: TransitionStep::Cleanup,
            path: backup.clone(),
            source,
        })?;

        let remote = Location::Remote(fetched.remote.clone());
        self.run_sync(&fetched, &remote, &Location::Local).await
    }

    /// Reconcile both records, then transfer from the authoritative side.
    pub async fn sync(&mut self) -> Result<SyncOutcome> {
        self.require_clean()?;
        let local = self.store.load_local()?;

        let fetched = match self
            .fetch_metadata(&local.remote, RepoPath::StagingDir)
            .await
            .and_then(|()| self.store.load_fetched(RepoPath::StagingDir))
        {
            Ok(config) => config,
            Err(e) => {
                self.discard_staging();
                return Err(e);
            }
        };
        info!("Got remote config");

        let outcome = merge(local, fetched);
        debug!(direction = ?outcome.direction, "configs merged");
        transition::apply(&self.store, &outcome)?;
        info!("Config updated");

        let remote = Location::Remote(outcome.config.remote.clone());
        let (source, destination) = match outcome.direction {
            Direction::LocalWins | Direction::Equal => (Location::Local, remote),
            Direction::RemoteWins => (remote, Location::Local),
        };
        self.run_sync(&outcome.config, &source, &destination).await
    }

    async fn run_sync(
        &mut self,
        config: &RepoConfig,
        source: &Location,
        destination: &Location,
    ) -> Result<SyncOutcome> {
        let root = self.store.layout().root();
        Orchestrator::new(&self.tool, &mut self.prompt, root)
            .run_sync(config, source, destination)
            .await
    }

    /// Copy the remote's metadata directory into `into`.
    ///
    /// A non-zero exit is only logged: a failed fetch shows up when the
    /// fetched record is read.
    async fn fetch_metadata(&self, remote: &str, into: RepoPath) -> Result<()> {
        let args = vec![
            "copy".to_string(),
            remote_metadata(remote),
            into.to_string(),
        ];
        let status = self.tool.run(self.root(), &args).await?;
        if status.is_success() {
            debug!(into = %into, "fetched remote metadata");
        } else {
            warn!(%status, "fetching remote metadata failed");
        }
        Ok(())
    }

    async fn transfer(&self, operation: &str, args: &[String]) -> Result<()> {
        let status = self.tool.run(self.root(), args).await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::TransferFailed {
                operation: operation.to_string(),
                status: status.to_string(),
            })
        }
    }

    fn discard_staging(&self) {
        let staging = self.layout().staging_dir();
        if !staging.exists() {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&staging) {
            warn!(path = %staging.display(), error = %e, "could not remove staging directory");
        }
    }

    fn require_tracked(&self) -> Result<()> {
        if self.layout().is_tracked() {
            Ok(())
        } else {
            Err(Error::RepoNotFound {
                path: self.root().to_path_buf(),
            })
        }
    }

    fn require_clean(&self) -> Result<()> {
        self.require_tracked()?;
        match self.layout().leftovers().first() {
            Some(leftover) => Err(Error::RepoBroken {
                path: self.root().to_path_buf(),
                leftover: *leftover,
            }),
            None => Ok(()),
        }
    }
}
