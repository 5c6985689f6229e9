//! Updater acquisition and handoff orchestration.
//!
//! [`Updater`] is the stateful center of the crate. One instance is
//! constructed by the embedding application and owns everything the
//! update cycle needs:
//!
//! - the recorded path of the last-acquired updater artifact
//! - the auto-delete flag
//! - the (memoized) path of the application's own artifact
//!
//! A full cycle composes linearly: the caller decides whether an update
//! is needed (see [`VersionComparator`](crate::version::VersionComparator)),
//! calls [`ensure_updater`](Updater::ensure_updater) to place the updater
//! artifact on disk, then [`launch_update`](Updater::launch_update) to
//! spawn it and return. The spawned process replaces the running binary
//! after this process exits; nothing here waits on it.
//!
//! All methods take `&mut self`: one logical thread of control per update
//! cycle, enforced by the borrow checker rather than documentation. There
//! is no internal retry, no cancellation, and no timeout beyond the
//! resolver's connect timeout.
//!
//! # Examples
//!
//! ```rust,no_run
//! use handoff_update::{ReleaseResolver, Updater};
//!
//! # async fn example() -> Result<(), handoff_update::UpdateError> {
//! let mut updater = Updater::new(ReleaseResolver::new()?);
//!
//! // Place the updater next to the running binary.
//! let self_dir = updater.self_artifact()?.parent().unwrap().to_path_buf();
//! updater.ensure_updater(&self_dir).await?;
//!
//! // Hand off: the updater downloads the new build, swaps it in, and
//! // relaunches once this process exits.
//! let new_artifact = self_dir.join("app.new");
//! updater
//!     .launch_update("https://example.com/releases/app-2.0.0", &new_artifact, true)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod handoff;


use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::UpdateError;
use crate::release::ReleaseResolver;
use crate::utils::platform;

/// Provider for the running application's own artifact path.
///
/// Injected rather than introspected so embedders (and tests) control
/// where "the old binary" lives; the default asks the OS via
/// [`std::env::current_exe`].
type SelfArtifactFn = Box<dyn Fn() -> Result<PathBuf, UpdateError> + Send + Sync>;

/// Orchestrates updater acquisition and the update handoff.
///
/// See the [module documentation](self) for the full lifecycle. State is
/// in-memory only and dies with the process; the next process rediscovers
/// the updater path by calling [`ensure_updater`](Self::ensure_updater)
/// again.
pub struct Updater {
    resolver: ReleaseResolver,
    /// Last-recorded updater artifact path. Recorded before the download
    /// completes, so the path may briefly name a file that does not exist
    /// yet, and the file may be deleted externally later. Callers must
    /// not infer existence from the path alone.
    updater_file: Option<PathBuf>,
    auto_delete: bool,
    /// Memoized self-artifact path, computed at most once.
    self_path: Option<PathBuf>,
    self_artifact_provider: SelfArtifactFn,
}

impl Updater {
    /// Create an updater that resolves release assets through `resolver`.
    ///
    /// Auto-delete starts disabled and the self-artifact path defaults to
    /// the running executable, resolved lazily on first use.
    #[must_use]
    pub fn new(resolver: ReleaseResolver) -> Self {
        Self {
            resolver,
            updater_file: None,
            auto_delete: false,
            self_path: None,
            self_artifact_provider: Box::new(|| {
                std::env::current_exe().map_err(|e| UpdateError::Configuration {
                    reason: format!("cannot determine running executable path: {e}"),
                })
            }),
        }
    }

    /// Supply the application's own artifact path up front instead of
    /// resolving it from the running executable.
    #[must_use]
    pub fn with_self_artifact(mut self, path: impl Into<PathBuf>) -> Self {
        self.self_path = Some(path.into());
        self
    }

    /// Replace the self-artifact provider used when no explicit path was
    /// supplied.
    #[must_use]
    pub fn with_self_artifact_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Result<PathBuf, UpdateError> + Send + Sync + 'static,
    {
        self.self_artifact_provider = Box::new(provider);
        self
    }

    /// Toggle auto-delete mode.
    ///
    /// With auto-delete set, [`ensure_updater`](Self::ensure_updater)
    /// removes any existing artifact at the target path instead of
    /// downloading one, for callers that manage the updater artifact
    /// through a separate channel.
    pub fn set_auto_delete(&mut self, value: bool) {
        self.auto_delete = value;
    }

    /// Whether auto-delete mode is currently set.
    #[must_use]
    pub fn auto_delete(&self) -> bool {
        self.auto_delete
    }

    /// The currently recorded updater artifact path, if any.
    ///
    /// This is where the updater *will be* (or was) placed; the file may
    /// not exist yet, or may have been deleted since.
    #[must_use]
    pub fn current_updater(&self) -> Option<&Path> {
        self.updater_file.as_deref()
    }

    /// The absolute path of the running application's own artifact.
    ///
    /// Resolved through the injected provider on first call and memoized
    /// for the lifetime of this instance.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Configuration`] if no path was supplied and
    /// the provider cannot determine one.
    pub fn self_artifact(&mut self) -> Result<PathBuf, UpdateError> {
        if let Some(path) = &self.self_path {
            return Ok(path.clone());
        }
        let path = std::path::absolute((self.self_artifact_provider)()?)?;
        self.self_path = Some(path.clone());
        Ok(path)
    }

    /// Ensure a local copy of the updater artifact exists at
    /// `destination`, downloading the latest release asset if needed.
    ///
    /// If `destination` names an existing directory, the effective target
    /// is `<destination>/Updater` with the platform executable suffix.
    /// The target path is recorded as the current updater before any I/O,
    /// so later callers that only need "where will the updater be" get a
    /// stable answer even mid-download.
    ///
    /// In auto-delete mode this deletes any existing file at the target
    /// (a missing file counts as success) and returns without touching
    /// the network. Otherwise the latest release asset is resolved and
    /// copied into place, overwriting any previous artifact.
    ///
    /// Returns the final artifact path.
    ///
    /// # Errors
    ///
    /// Propagates [`UpdateError::Network`], [`UpdateError::Upstream`] and
    /// [`UpdateError::ResponseFormat`] from release resolution,
    /// [`UpdateError::Download`] for copy failures, and
    /// [`UpdateError::Io`] if a stale artifact cannot be removed.
    pub async fn ensure_updater(
        &mut self,
        destination: impl AsRef<Path>,
    ) -> Result<PathBuf, UpdateError> {
        let mut target = destination.as_ref().to_path_buf();
        if target.is_dir() {
            target.push(platform::updater_executable_name());
        }
        let target = std::path::absolute(target)?;

        // Recorded unconditionally, before the artifact exists.
        self.updater_file = Some(target.clone());

        if self.auto_delete {
            debug!("Auto-delete set, removing {} instead of downloading", target.display());
            match tokio::fs::remove_file(&target).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            return Ok(target);
        }

        let url = self.resolver.latest_asset_url().await?;
        self.resolver.download(&url, &target).await?;

        info!("Updater artifact ready at {}", target.display());
        Ok(target)
    }

    /// Hand the update off to the recorded updater artifact.
    ///
    /// Resolves the updater path from state (established by a prior
    /// [`ensure_updater`](Self::ensure_updater) call) and the old
    /// artifact path from [`self_artifact`](Self::self_artifact), then
    /// delegates to [`launch_update_with`](Self::launch_update_with).
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Configuration`] when no updater path has
    /// been recorded; otherwise see
    /// [`launch_update_with`](Self::launch_update_with).
    pub async fn launch_update(
        &mut self,
        download_url: &str,
        new_artifact: impl AsRef<Path>,
        restart: bool,
    ) -> Result<(), UpdateError> {
        let updater_artifact =
            self.updater_file.clone().ok_or_else(|| UpdateError::Configuration {
                reason: "no updater artifact recorded; call ensure_updater first or use \
                         launch_update_with"
                    .to_string(),
            })?;
        let old_artifact = self.self_artifact()?;
        self.launch_update_with(updater_artifact, old_artifact, download_url, new_artifact, restart)
            .await
    }

    /// Hand the update off to an explicitly named updater artifact.
    ///
    /// Spawns the updater as an independent child process with four
    /// positional arguments: the download URL of the new application
    /// artifact, the absolute old artifact path, the absolute path to
    /// write the new artifact to, and the restart flag rendered as
    /// `"true"` or the empty string. The child is neither waited
    /// on nor monitored; this returns as soon as the spawn succeeds,
    /// because the parent must itself exit before the updater can safely
    /// overwrite its on-disk image.
    ///
    /// When auto-delete is set at call time it is cleared for the
    /// duration of a forced re-acquisition into the old artifact's
    /// directory (so the updater being launched actually exists rather
    /// than having just been deleted), then restored to its prior value
    /// whether or not the re-acquisition succeeded. A re-acquisition
    /// failure aborts before any spawn is attempted.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::Launch`] if the child process cannot be spawned
    /// - acquisition errors from the auto-delete re-acquisition sequence
    pub async fn launch_update_with(
        &mut self,
        updater_artifact: impl AsRef<Path>,
        old_artifact: impl AsRef<Path>,
        download_url: &str,
        new_artifact: impl AsRef<Path>,
        restart: bool,
    ) -> Result<(), UpdateError> {
        let updater_artifact = std::path::absolute(updater_artifact)?;
        let old_artifact = std::path::absolute(old_artifact)?;
        let new_artifact = std::path::absolute(new_artifact)?;

        if self.auto_delete {
            debug!("Auto-delete set, re-acquiring updater before handoff");
            self.auto_delete = false;
            let refreshed = self
                .ensure_updater(old_artifact.parent().unwrap_or(Path::new(".")))
                .await;
            self.auto_delete = true;
            refreshed?;
        }

        let mut command = handoff::handoff_command(
            &updater_artifact,
            download_url,
            &old_artifact,
            &new_artifact,
            restart,
        );
        let program = command.as_std().get_program().to_string_lossy().into_owned();

        info!(
            "Launching updater {} (old: {}, new: {}, restart: {})",
            updater_artifact.display(),
            old_artifact.display(),
            new_artifact.display(),
            restart
        );

        command
            .spawn()
            .map_err(|source| UpdateError::Launch { program, source })?;

        Ok(())
    }
}
