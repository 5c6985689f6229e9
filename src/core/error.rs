//! Error handling for handoff-update.
//!
//! Every fallible operation in this crate returns [`UpdateError`]. The
//! taxonomy is deliberately small and closed: each variant corresponds to
//! one failure mode a caller may want to handle differently, and nothing
//! is retried or swallowed internally; a failure always propagates to the
//! call site that triggered it.
//!
//! # Error Categories
//!
//! - **Version parsing**: [`UpdateError::MalformedVersion`]
//! - **Release resolution**: [`UpdateError::Network`],
//!   [`UpdateError::Upstream`], [`UpdateError::ResponseFormat`]
//! - **Artifact acquisition**: [`UpdateError::Download`], [`UpdateError::Io`]
//! - **Handoff**: [`UpdateError::Launch`], [`UpdateError::Configuration`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use handoff_update::{ReleaseResolver, UpdateError};
//!
//! # async fn example() -> Result<(), UpdateError> {
//! let resolver = ReleaseResolver::new()?;
//! match resolver.latest_asset_url().await {
//!     Ok(url) => println!("latest updater asset: {url}"),
//!     Err(UpdateError::Upstream { status }) => {
//!         eprintln!("release endpoint answered HTTP {status}");
//!     }
//!     Err(e) => eprintln!("update check failed: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// The error type for all handoff-update operations.
///
/// Variants carry enough context (version strings, URLs, HTTP statuses,
/// source errors) for a caller to report the failure without re-deriving
/// it. Source errors are preserved via `#[source]` so the full chain is
/// available through [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum UpdateError {
    /// A version string contained a component that is not a non-negative
    /// integer.
    ///
    /// Versions are dotted sequences of decimal components (`"1.2.10"`).
    /// A component like `"a"` or an empty component (including the empty
    /// string, which splits to a single empty component) is an error,
    /// never silently treated as zero.
    #[error("malformed version '{version}': component '{component}' is not a non-negative integer")]
    MalformedVersion {
        /// The full version string that failed to parse.
        version: String,
        /// The offending component within it.
        component: String,
    },

    /// A network-level failure while talking to the release endpoint or
    /// downloading an asset: connection refused, DNS failure, or the
    /// connect timeout expiring.
    #[error("network error while contacting release endpoint")]
    Network {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The release endpoint answered with a non-success HTTP status.
    ///
    /// Surfaced as a hard error so callers can distinguish "no release
    /// found" from a resolver that silently produced nothing.
    #[error("release endpoint returned HTTP {status}")]
    Upstream {
        /// The HTTP status code received.
        status: u16,
    },

    /// The release endpoint returned a 200 response whose body did not
    /// match the expected shape (an object with an `assets` array whose
    /// first element carries a `browser_download_url` string).
    #[error("unexpected release response: {reason}")]
    ResponseFormat {
        /// What was missing or malformed.
        reason: String,
    },

    /// Copying the resolved updater asset into place failed: the asset
    /// GET returned a non-success status, the body could not be read, or
    /// the bytes could not be written to the target path.
    #[error("failed to download updater artifact from {url}: {reason}")]
    Download {
        /// The asset URL being fetched.
        url: String,
        /// What went wrong during the copy.
        reason: String,
    },

    /// The updater child process could not be spawned: missing runtime,
    /// permission denied, or a bad artifact path.
    #[error("failed to launch updater process '{program}'")]
    Launch {
        /// The program the spawn was attempted against.
        program: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// A handoff was requested before any updater artifact path was
    /// established, or the running application's own artifact path could
    /// not be determined.
    #[error("updater not configured: {reason}")]
    Configuration {
        /// Why the handoff could not proceed.
        reason: String,
    },

    /// A local filesystem operation outside the download path failed,
    /// such as removing a stale updater artifact in auto-delete mode.
    #[error("filesystem operation failed")]
    Io(#[from] std::io::Error),
}
