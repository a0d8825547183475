//! Health probe entry point.
//!
//! Runs one probe tick against the gateway root and exits 0 when it answered
//! 200, 1 otherwise. Scheduling (hourly) and retries (one retry after five
//! minutes) are configured in the scheduler that launches this binary.

use placeholder_gateway::{
    config::Settings,
    logging,
    probe::{exit_code, HealthProbe},
};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init(&settings.logging);

    let probe = match HealthProbe::from_config(&settings.probe) {
        Ok(probe) => probe,
        Err(e) => {
            error!(error = %e, "Failed to build health probe");
            return ExitCode::FAILURE;
        }
    };

    let outcome = probe.check().await;
    match &outcome {
        Ok(report) => info!(
            target_url = %report.target,
            checked_at = %report.checked_at.to_rfc3339(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Health probe tick succeeded"
        ),
        Err(failure) => error!(target_url = %probe.target(), "Health probe failed: {}", failure),
    }

    exit_code(&outcome)
}
