// crates/dispatch-board-feed/src/source/http.rs
// ============================================================================
// Module: Dispatch Board HTTP Source
// Description: HTTP-backed row source for published sheet feeds.
// Purpose: Fetch and decode a CSV feed via HTTP GET.
// Dependencies: dispatch-board-core, reqwest, url
// ============================================================================

//! ## Overview
//! `HttpSource` fetches `http://` and `https://` feeds, typically a sheet
//! published as CSV. Non-success status codes fail closed, responses are
//! capped at [`MAX_FEED_BYTES`], and remote content is untrusted until the
//! decoder and the core's validity filtering have had their say.
//!
//! [`MAX_FEED_BYTES`]: crate::source::MAX_FEED_BYTES

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use dispatch_board_core::RawRow;
use reqwest::blocking::Client;
use url::Url;

use crate::decode::decode_csv;
use crate::source::MAX_FEED_BYTES;
use crate::source::RowSource;
use crate::source::SourceError;
use crate::source::enforce_max_bytes;

// ============================================================================
// SECTION: Config
// ============================================================================

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP row source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Feed URL; must use the http or https scheme.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl HttpSourceConfig {
    /// Creates a config with the default timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// ============================================================================
// SECTION: HTTP Source
// ============================================================================

/// HTTP-backed row source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    /// Validated feed URL.
    url: Url,
    /// HTTP client used for fetch requests.
    client: Client,
}

impl HttpSource {
    /// Builds an HTTP source from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the URL is invalid, uses an unsupported
    /// scheme, or the HTTP client cannot be constructed.
    pub fn new(config: &HttpSourceConfig) -> Result<Self, SourceError> {
        let url =
            Url::parse(&config.url).map_err(|err| SourceError::InvalidTarget(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(SourceError::UnsupportedScheme(scheme.to_string())),
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| SourceError::Http(err.to_string()))?;
        Ok(Self {
            url,
            client,
        })
    }
}

impl RowSource for HttpSource {
    fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .map_err(|err| SourceError::Http(err.to_string()))?;
        if !response.status().is_success() {
            return Err(SourceError::Http(format!("http status {}", response.status())));
        }
        if let Some(length) = response.content_length() {
            let length = usize::try_from(length)
                .map_err(|_| SourceError::Http("content length exceeds usize".to_string()))?;
            enforce_max_bytes(length)?;
        }
        let mut limited = response.take((MAX_FEED_BYTES as u64).saturating_add(1));
        let mut bytes = Vec::new();
        limited.read_to_end(&mut bytes).map_err(|err| SourceError::Http(err.to_string()))?;
        enforce_max_bytes(bytes.len())?;
        decode_csv(&bytes)
    }
}
