//! Common trait for upstream REST clients

use async_trait::async_trait;
use serde_json::Value;

use crate::error::UpstreamError;
use crate::upstream::resource::{NewPost, ResourcePath};

/// Client for the upstream REST service.
///
/// Implementations issue exactly one request per call and return the JSON
/// body untouched.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// GET a resource and return its body
    async fn fetch(&self, resource: ResourcePath) -> Result<Value, UpstreamError>;

    /// POST a new post to the posts collection and return the created object
    async fn create_post(&self, post: &NewPost) -> Result<Value, UpstreamError>;
}
