//! Rendering-proxy client for JavaScript-heavy listing pages.
//!
//! Listing pages are rendered by [ZenRows](https://www.zenrows.com) before
//! parsing, so client-side content (and anything revealed by clicking a
//! "load more" button) is present in the captured HTML.
//!
//! # Architecture
//!
//! - [`RenderPage`]: the fetch seam every scraper goes through
//! - [`ZenRowsClient`]: the HTTP implementation, built once in `main` and
//!   shared by reference across concurrent site tasks
//! - [`InteractionStep`]: one click or wait executed in the browser before capture
//!
//! No retries happen here. A failed fetch fails the one site task that issued it.

use crate::error::FetchError;
use crate::utils::truncate_for_log;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Default ZenRows API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.zenrows.com/v1/";

/// A browser action run before the page is captured.
///
/// Serializes to the proxy's instruction format: `{"click": "<selector>"}` or
/// `{"wait": <ms>}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InteractionStep {
    Click { click: String },
    Wait { wait: u64 },
}

impl InteractionStep {
    pub fn click(selector: &str) -> Self {
        InteractionStep::Click {
            click: selector.to_string(),
        }
    }

    pub fn wait(ms: u64) -> Self {
        InteractionStep::Wait { wait: ms }
    }
}

/// Fetches the fully rendered HTML of a page.
pub trait RenderPage {
    /// Render `url`, waiting `wait_ms` after load and running `script` first.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failures, non-success HTTP
    /// statuses, or a missing credential.
    async fn fetch_rendered_page(
        &self,
        url: &str,
        wait_ms: u64,
        script: Option<&[InteractionStep]>,
    ) -> Result<String, FetchError>;
}

/// ZenRows-backed [`RenderPage`] implementation.
///
/// Holds the API key read-only; cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct ZenRowsClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for ZenRowsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenRowsClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ZenRowsClient {
    /// Build a client with a request timeout.
    ///
    /// A missing `api_key` is not an error here; every fetch then fails with
    /// [`FetchError::MissingCredential`] so each site still writes an error file.
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Query parameters for one render request, without the credential.
    fn render_params(
        url: &str,
        wait_ms: u64,
        script: Option<&[InteractionStep]>,
    ) -> Result<Vec<(&'static str, String)>, FetchError> {
        let mut params = vec![
            ("url", url.to_string()),
            ("js_render", "true".to_string()),
            ("wait", wait_ms.to_string()),
        ];
        if let Some(steps) = script.filter(|s| !s.is_empty()) {
            params.push(("js_instructions", serde_json::to_string(steps)?));
        }
        Ok(params)
    }
}

impl RenderPage for ZenRowsClient {
    #[instrument(level = "info", skip(self, script), fields(steps = script.map_or(0, |s| s.len())))]
    async fn fetch_rendered_page(
        &self,
        url: &str,
        wait_ms: u64,
        script: Option<&[InteractionStep]>,
    ) -> Result<String, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingCredential)?;
        let params = Self::render_params(url, wait_ms, script)?;

        let t0 = Instant::now();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("apikey", api_key)])
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = t0.elapsed().as_millis();

        if !status.is_success() {
            warn!(status = status.as_u16(), elapsed_ms, "Rendering request rejected");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: truncate_for_log(&body, 300),
            });
        }

        debug!(bytes = body.len(), elapsed_ms, "Rendered page");
        Ok(body)
    }
}
