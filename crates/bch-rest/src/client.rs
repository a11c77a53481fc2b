//! REST HTTP client.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::error::RestError;
use crate::types::{DsProof, RestConfig};

/// HTTP client for the REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    config: RestConfig,
    client: reqwest::Client,
}

impl RestClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RestConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Client configuration.
    pub fn config(&self) -> &RestConfig {
        &self.config
    }

    /// Fetch the double-spend proof for `txid`.
    ///
    /// Returns `Ok(None)` when the server knows of no double spend. `txid`
    /// must be exactly 64 hex digits; anything else is rejected before a
    /// request is made, since it is spliced into the URL path.
    pub async fn get_ds_proof(&self, txid: &str) -> Result<Option<DsProof>, RestError> {
        if txid.len() != 64 || !txid.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RestError::InvalidTxid(txid.to_string()));
        }
        let path = format!("dsproof/getdsproof/{}", txid);
        self.do_request(&path).await
    }

    /// GET `path` under the configured base URL and deserialize the body.
    ///
    /// An empty body deserializes as JSON `null`.
    async fn do_request<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestError> {
        let url = format!("{}/{}", self.config.rest_url.trim_end_matches('/'), path);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .headers(self.build_headers())
            .send()
            .await?;

        let status = resp.status();
        debug!("GET {} -> {}", url, status);

        if status.as_u16() == 404 {
            return Err(RestError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RestError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(ref token) = self.config.api_token {
            if let Ok(val) = HeaderValue::from_str(&format!("Token {}", token)) {
                headers.insert(AUTHORIZATION, val);
            }
        }

        headers
    }
}
