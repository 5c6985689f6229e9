//! handoff-update - self-update orchestration via an external updater process.
//!
//! A running program cannot portably overwrite its own executable: the
//! file is locked or in use for as long as the process lives. This crate
//! solves that by orchestrating a *handoff*: it acquires a companion
//! updater program from the latest GitHub release, then spawns it as an
//! independent child process carrying everything it needs to replace the
//! application's on-disk artifact and optionally relaunch it once the
//! application exits. The hard parts live here: the version-ordering
//! decision, the release-asset resolution, the idempotent acquisition of
//! the updater artifact, and the argument/lifecycle contract of the
//! spawn. The actual binary replacement happens inside the spawned
//! updater, which is a separate program.
//!
//! # Components
//!
//! Composed linearly on each update cycle:
//!
//! 1. [`version::VersionComparator`] decides whether an update is
//!    needed by comparing dotted version strings numerically.
//! 2. [`ReleaseResolver`] queries a latest-release endpoint and
//!    extracts the first downloadable asset URL.
//! 3. [`Updater::ensure_updater`] places the updater artifact at a
//!    target path, downloading it when required.
//! 4. [`Updater::launch_update`] spawns the updater with the handoff
//!    arguments and returns immediately; the child outlives this
//!    process.
//!
//! # Example
//!
//! ```rust,no_run
//! use handoff_update::{ReleaseResolver, Updater, VersionComparator};
//!
//! # async fn example() -> Result<(), handoff_update::UpdateError> {
//! if VersionComparator::needs_update(env!("CARGO_PKG_VERSION"), "2.0.0")? {
//!     let mut updater = Updater::new(ReleaseResolver::new()?);
//!     updater.ensure_updater(std::env::temp_dir()).await?;
//!     updater
//!         .launch_update(
//!             "https://example.com/releases/app-2.0.0",
//!             std::env::temp_dir().join("app.new"),
//!             true,
//!         )
//!         .await?;
//!     // Exit soon: the spawned updater replaces this binary after the
//!     // process terminates.
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every failure is surfaced as a typed [`UpdateError`]; nothing is
//! retried or logged-and-swallowed internally. See [`core::error`].
//!
//! # Concurrency
//!
//! One logical thread of control per update cycle. All operations are
//! `async` but sequential: no internal tasks, no cancellation, and a
//! single timeout (the resolver's 10-second connect timeout). State
//! mutation requires `&mut Updater`, so unsynchronized sharing is ruled
//! out at compile time.

pub mod core;
pub mod release;
pub mod updater;
pub mod utils;
pub mod version;

pub use crate::core::UpdateError;
pub use crate::release::ReleaseResolver;
pub use crate::updater::Updater;
pub use crate::version::VersionComparator;
