//! Single-shot health probe against the gateway root endpoint

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::config::ProbeConfig;
use crate::error::{AppError, ProbeFailure, Result};

/// Maximum number of body characters logged for an unexpected status
pub const EXCERPT_CHARS: usize = 100;

/// Successful probe tick
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub target: String,
    pub status: u16,
    pub elapsed: Duration,
    pub checked_at: DateTime<Utc>,
}

/// Result of one probe tick
pub type ProbeOutcome = std::result::Result<ProbeReport, ProbeFailure>;

/// Health probe issuing one GET per tick
pub struct HealthProbe {
    target: String,
    client: Client,
}

impl HealthProbe {
    /// Create a probe for `target` that waits at most `timeout` for a response
    pub fn new(target: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            target: target.into(),
            client,
        })
    }

    pub fn from_config(config: &ProbeConfig) -> Result<Self> {
        Self::new(config.target_url(), config.timeout())
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Run one tick. Healthy only when the target answers 200.
    pub async fn check(&self) -> ProbeOutcome {
        info!(target_url = %self.target, "Probing health check endpoint");
        let started = Instant::now();

        let response = match self.client.get(&self.target).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(target_url = %self.target, error = %e, "Connection to gateway failed");
                return Err(ProbeFailure::Connection(e));
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            let elapsed = started.elapsed();
            info!(
                target_url = %self.target,
                status = status.as_u16(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Gateway is healthy"
            );
            return Ok(ProbeReport {
                target: self.target.clone(),
                status: status.as_u16(),
                elapsed,
                checked_at: Utc::now(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        let excerpt = excerpt(&body, EXCERPT_CHARS);
        error!(
            target_url = %self.target,
            status = status.as_u16(),
            excerpt = %excerpt,
            "Unexpected health check status"
        );

        Err(ProbeFailure::UnexpectedStatus {
            status: status.as_u16(),
            excerpt,
        })
    }
}

/// Exit status reported to the scheduler for one tick
pub fn exit_code(outcome: &ProbeOutcome) -> ExitCode {
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// First `max_chars` characters of `body`
pub fn excerpt(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}
