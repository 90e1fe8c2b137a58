use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use services::SubmissionFailure;
use url::Url;

use crate::response::{parse_body, ApiResponse};
use crate::Transport;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid backend URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// JSON-over-HTTP transport for the REST backend.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let mut base_url = Url::parse(base_url).map_err(|source| TransportError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        // Url::join drops the last path segment unless the base ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpTransport { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<ApiResponse, SubmissionFailure> {
        let url = self
            .url_for(path)
            .map_err(|e| SubmissionFailure::unreachable(format!("invalid endpoint '{}': {}", path, e)))?;

        let response = match self.client.post(url.clone()).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%url, error = %e, timeout = e.is_timeout(), "no response from backend");
                return Err(SubmissionFailure::unreachable(e.to_string()));
            }
        };

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "failed to read backend response");
            SubmissionFailure::unreachable(e.to_string())
        })?;
        let body = parse_body(text);

        if !status.is_success() {
            let detail = ApiResponse::new(status.as_u16(), body)
                .message()
                .map(str::to_string)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| status.as_str().to_string());
            tracing::warn!(%url, status = status.as_u16(), "backend returned error status");
            return Err(SubmissionFailure::error_status(status.as_u16(), detail));
        }

        tracing::debug!(%url, status = status.as_u16(), "backend accepted request");
        Ok(ApiResponse::new(status.as_u16(), body))
    }
}
