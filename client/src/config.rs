//! Client configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `REAVISE_*` environment variables and an
//! optional config file, in that order of precedence.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::http::DEFAULT_API_BASE_URL;

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Which facade callers should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// Serve fixtures through the demo facade.
    Demo,
    /// Talk to the backend through the live facades.
    Live,
}

/// Settings for the ReaVise client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REAVISE")]
pub struct ClientSettings {
    /// Serve fixture data instead of calling the backend.
    #[ortho_config(default = false)]
    pub demo: bool,
    /// Backend API root.
    pub api_base_url: Option<String>,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: Option<u64>,
    /// Seed for demo like counts; random when unset.
    pub like_seed: Option<u64>,
    /// Alternate demo fixture document.
    pub demo_dataset_path: Option<PathBuf>,
}

impl ClientSettings {
    /// Runtime mode selected by the `demo` flag.
    pub const fn mode(&self) -> ApiMode {
        if self.demo { ApiMode::Demo } else { ApiMode::Live }
    }

    /// Parsed API root, falling back to [`DEFAULT_API_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured value is not a URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Request timeout, falling back to ten seconds.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.request_timeout_ms
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }
}
