//! JSON-over-HTTP endpoint.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ProviderError;

/// How much of an unparseable body to keep for diagnostics.
const BODY_SNIPPET_CHARS: usize = 500;

/// Build the HTTP client shared by a provider's requests.
pub fn http_client(timeout_secs: u64) -> Result<reqwest::Client, ProviderError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(http)
}

/// A single provider URL answering GET requests with JSON.
#[derive(Debug, Clone)]
pub struct JsonEndpoint {
    http: reqwest::Client,
    url: Url,
}

impl JsonEndpoint {
    /// Create an endpoint for `url` using the given client.
    pub fn new(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    /// Issue one GET with the given query parameters and decode the body.
    ///
    /// Non-2xx statuses become `ProviderError::Api`; bodies that do not
    /// decode as `T` become `ProviderError::Json`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        debug!(url = %self.url, ?query, "provider request");

        let mut request = self.http.get(self.url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}
