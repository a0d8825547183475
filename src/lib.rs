//! JSONPlaceholder gateway
//!
//! Relays a fixed set of endpoints to the JSONPlaceholder REST API and ships
//! a single-shot health probe for an external scheduler to run.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod probe;
pub mod upstream;

pub use error::{AppError, ProbeFailure, Result, UpstreamError};

use std::sync::Arc;
use tracing::info;

use upstream::{HttpUpstream, Upstream};

/// Application state shared across all handlers
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    /// Build state with the HTTP upstream described by `settings`
    pub fn from_settings(settings: &config::Settings) -> Result<Self> {
        let upstream = HttpUpstream::new(&settings.upstream)?;
        info!(upstream = %upstream.base_url(), "Upstream client ready");

        Ok(Self {
            upstream: Arc::new(upstream),
        })
    }
}
