//! HTTP upstream client implementation

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::{AppError, Result, UpstreamError};
use crate::upstream::resource::{NewPost, ResourcePath, Shape};
use crate::upstream::traits::Upstream;

/// reqwest-backed upstream client.
///
/// Idle connections are never kept, so every call opens its own connection
/// and releases it once the response body has been read.
pub struct HttpUpstream {
    base_url: String,
    client: Client,
}

impl HttpUpstream {
    /// Create a new upstream client from configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base address requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a response into a JSON value of the expected shape
    async fn read_json(url: &str, response: Response, shape: Shape) -> std::result::Result<Value, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|source| UpstreamError::Transport {
            url: url.to_string(),
            source,
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !shape.matches(&value) {
            return Err(UpstreamError::Decode {
                url: url.to_string(),
                reason: format!("expected {}", shape),
            });
        }

        Ok(value)
    }

    fn log_outcome(method: &str, url: &str, result: &std::result::Result<Value, UpstreamError>) {
        match result {
            Ok(_) => debug!(method = %method, url = %url, "Upstream call succeeded"),
            Err(UpstreamError::Status { status, body, .. }) => warn!(
                method = %method,
                url = %url,
                kind = "status",
                status = %status,
                body = %body,
                "Upstream call failed"
            ),
            Err(e) => warn!(
                method = %method,
                url = %url,
                kind = e.kind(),
                error = %e,
                "Upstream call failed"
            ),
        }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch(&self, resource: ResourcePath) -> std::result::Result<Value, UpstreamError> {
        let url = self.url_for(&resource.path());
        debug!(url = %url, "Sending upstream GET");

        let result = match self.client.get(&url).send().await {
            Ok(response) => Self::read_json(&url, response, resource.shape()).await,
            Err(source) => Err(UpstreamError::Transport {
                url: url.clone(),
                source,
            }),
        };

        Self::log_outcome("GET", &url, &result);
        result
    }

    async fn create_post(&self, post: &NewPost) -> std::result::Result<Value, UpstreamError> {
        let url = self.url_for(&ResourcePath::Posts.path());
        debug!(url = %url, user_id = post.user_id, "Sending upstream POST");

        let result = match self.client.post(&url).json(post).send().await {
            Ok(response) => Self::read_json(&url, response, Shape::Object).await,
            Err(source) => Err(UpstreamError::Transport {
                url: url.clone(),
                source,
            }),
        };

        Self::log_outcome("POST", &url, &result);
        result
    }
}
