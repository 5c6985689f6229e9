//! Shared helpers for integration tests.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Initialize tracing output for a test, honoring `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// The latest-release path used by all mock endpoints in these tests.
pub const RELEASE_PATH: &str = "/repos/example/updater/releases/latest";

/// A minimal latest-release body whose first asset points at `asset_url`.
pub fn release_body(asset_url: &str) -> serde_json::Value {
    json!({
        "tag_name": "v1.4.0",
        "assets": [
            { "name": "Updater", "browser_download_url": asset_url },
            { "name": "Updater.sha256", "browser_download_url": format!("{asset_url}.sha256") }
        ]
    })
}

/// Start a mock server answering the release endpoint with a release
/// whose first asset is served from the same server at `/asset`.
#[allow(dead_code)]
pub async fn release_server_with_asset(asset_bytes: &[u8]) -> MockServer {
    let server = MockServer::start().await;
    let asset_url = format!("{}/asset", server.uri());

    Mock::given(method("GET"))
        .and(path(RELEASE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(release_body(&asset_url)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/asset"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(asset_bytes.to_vec()))
        .mount(&server)
        .await;

    server
}

/// Release endpoint URL on `server`.
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), RELEASE_PATH)
}
