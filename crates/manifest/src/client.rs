use crate::errors::{ManifestError, Result};
use std::time::Duration;

/// Publication address used by default, operated by the XRPL Foundation.
pub const DEFAULT_UNL_URL: &str = "https://vl.xrplf.org";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Lightweight HTTP client for published UNL documents.
#[derive(Clone, Debug)]
pub struct UnlClient {
    client: reqwest::Client,
    url: String,
}

/// Raw result of one fetch, before any envelope parsing.
///
/// The body is kept as text so that a malformed envelope is reported as a
/// manifest problem, not a transport problem.
#[derive(Debug, Clone)]
pub struct UnlFetch {
    pub http_code: u16,
    pub body: String,
}

impl UnlClient {
    /// Build a client for one publication address.
    ///
    /// Fails only when the underlying HTTP client cannot be constructed,
    /// which surfaces as [`ManifestError::Request`] rather than a panic.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the published document.
    ///
    /// Non-success statuses come back as [`ManifestError::Http`] so callers
    /// can still report the code; transport failures come back as
    /// [`ManifestError::Request`].
    pub async fn fetch(&self) -> Result<UnlFetch> {
        tracing::debug!(url = %self.url, "fetching published UNL");

        let response = self.client.get(&self.url).send().await?;
        let http_code = response.status().as_u16();

        if !response.status().is_success() {
            return Err(ManifestError::Http { code: http_code });
        }

        let body = response.text().await?;
        Ok(UnlFetch { http_code, body })
    }
}

impl UnlFetch {
    /// Parse the fetched body as a UNL envelope.
    pub fn envelope(&self) -> Result<crate::envelope::UnlEnvelope> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
