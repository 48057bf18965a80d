//! Where JSON documents come from

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{FetchError, Result};

/// Fetches a JSON document by URL.
///
/// [`HttpSource`] talks to the real API; tests plug in an in-memory source.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get(&self, url: &str) -> Result<serde_json::Value>;
}

/// [`JsonSource`] backed by a shared `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    http: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn get(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!(url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
