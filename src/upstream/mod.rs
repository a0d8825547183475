//! Upstream module - Resource paths, client trait and HTTP client

pub mod http_upstream;
pub mod resource;
pub mod traits;

pub use http_upstream::HttpUpstream;
pub use resource::{NewPost, ResourcePath, Shape};
pub use traits::Upstream;
