//! Release-asset resolution over the GitHub releases API.
//!
//! [`ReleaseResolver`] issues a single GET against a latest-release
//! endpoint and extracts the download URL of the first attached asset,
//! the companion updater binary. No other release metadata (tag name,
//! changelog) is retained, and no retries are performed; retry policy
//! belongs to the caller.
//!
//! The only timeout in the crate lives here: a 10-second connect timeout
//! on the HTTP client.

use std::path::Path;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, info};

use crate::core::UpdateError;

/// The latest-release endpoint for the companion updater program.
const DEFAULT_ENDPOINT: &str =
    "https://api.github.com/repos/aig787/handoff-updater/releases/latest";

/// Seconds to wait for the release endpoint connection to establish.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// A single downloadable file attached to a release.
#[derive(Debug, Deserialize)]
struct ReleaseAsset {
    browser_download_url: String,
}

/// The subset of the latest-release response this crate consumes.
#[derive(Debug, Deserialize)]
struct LatestRelease {
    assets: Vec<ReleaseAsset>,
}

/// Resolves the latest published updater asset from a release endpoint.
///
/// The resolver owns one [`reqwest::Client`] configured with the connect
/// timeout and an identifying user-agent; constructing a resolver is
/// therefore fallible. The endpoint defaults to the official updater
/// repository and can be redirected with [`with_endpoint`], which is how
/// tests point it at a local mock server.
///
/// # Examples
///
/// ```rust,no_run
/// use handoff_update::ReleaseResolver;
///
/// # async fn example() -> Result<(), handoff_update::UpdateError> {
/// let resolver = ReleaseResolver::new()?;
/// let url = resolver.latest_asset_url().await?;
/// println!("updater asset: {url}");
/// # Ok(())
/// # }
/// ```
///
/// [`with_endpoint`]: ReleaseResolver::with_endpoint
pub struct ReleaseResolver {
    endpoint: String,
    client: reqwest::Client,
}

impl ReleaseResolver {
    /// Create a resolver against the default updater release endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Network`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, UpdateError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a resolver against a custom latest-release endpoint.
    ///
    /// The endpoint must answer GitHub's latest-release JSON shape: an
    /// object with an `assets` array whose entries carry a
    /// `browser_download_url` string.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Network`] if the HTTP client cannot be
    /// constructed.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, UpdateError> {
        let user_agent = format!(
            "handoff-update/{} ({}; {})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()
            .map_err(|source| UpdateError::Network { source })?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// The endpoint this resolver queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the download URL of the first asset of the latest release.
    ///
    /// Issues exactly one GET; nothing is cached and nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::Network`] on a transport failure (connect,
    ///   timeout, body read)
    /// - [`UpdateError::Upstream`] on any non-success HTTP status
    /// - [`UpdateError::ResponseFormat`] when the body is not the
    ///   expected JSON shape or the release has no assets
    pub async fn latest_asset_url(&self) -> Result<String, UpdateError> {
        debug!("Fetching latest release from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| UpdateError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| UpdateError::Network { source })?;

        let release: LatestRelease =
            serde_json::from_str(&body).map_err(|e| UpdateError::ResponseFormat {
                reason: e.to_string(),
            })?;

        let asset = release.assets.first().ok_or_else(|| UpdateError::ResponseFormat {
            reason: "release has no assets".to_string(),
        })?;

        debug!("Resolved latest asset: {}", asset.browser_download_url);
        Ok(asset.browser_download_url.clone())
    }

    /// Copy the resource at `url` into `destination`, overwriting any
    /// existing file.
    ///
    /// This is the direct byte copy used to place the updater artifact on
    /// disk. The whole body is buffered before the write; updater
    /// binaries are small enough that streaming buys nothing here.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Download`] if the GET fails, answers a
    /// non-success status, the body cannot be read, or the bytes cannot
    /// be written to `destination`.
    pub async fn download(&self, url: &str, destination: &Path) -> Result<(), UpdateError> {
        info!("Downloading {} to {}", url, destination.display());

        let download_error = |reason: String| UpdateError::Download {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| download_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(download_error(format!("asset endpoint returned HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| download_error(e.to_string()))?;

        tokio::fs::write(destination, &bytes)
            .await
            .map_err(|e| download_error(format!("writing {}: {e}", destination.display())))?;

        debug!("Wrote {} bytes to {}", bytes.len(), destination.display());
        Ok(())
    }
}
