//! Example: loading a student dashboard in one round of concurrent calls
//!
//! Mirrors what the dashboard page does on mount: fire every read at once
//! and render whatever succeeds. One failing call never blocks the others.
//!
//! # Setup
//!
//! 1. Start the SmartPath backend (default `http://localhost:8000`)
//!
//! 2. Point the client at it and supply credentials: ```bash export
//!    SMARTPATH_API_URL=http://localhost:8000/api/v1 export
//!    SMARTPATH_EMAIL=student@example.com SMARTPATH_PASSWORD=... ```
//!
//! 3. Run this example: ```bash cargo run -p smartpath-infra --example
//!    dashboard_fanout ```

use smartpath_domain::{ClientConfig, LoginRequest};
use smartpath_infra::{config, SmartPathApi};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = config::load().unwrap_or_else(|err| {
        warn!(error = %err, "no configuration found, using defaults");
        ClientConfig::default()
    });
    let api = SmartPathApi::from_config(&config)?;

    let health = api.health.check().await?;
    info!(status = %health.status, version = ?health.version, "backend reachable");

    if !api.auth.is_authenticated() {
        let email = std::env::var("SMARTPATH_EMAIL")?;
        let password = std::env::var("SMARTPATH_PASSWORD")?;
        api.auth.login(&LoginRequest::new(email, password)).await?;
    }

    let (dashboard, reports, predictions, careers, plans) = futures::join!(
        api.performance.dashboard(),
        api.reports.history(Some(5)),
        api.performance.predictions(),
        api.career.recommendations(),
        api.study_plans.active(),
    );

    match dashboard {
        Ok(d) => info!(gpa = d.overall_gpa, subjects = d.total_subjects, "dashboard"),
        Err(err) => warn!(kind = ?err.kind(), "dashboard unavailable: {err}"),
    }
    match reports {
        Ok(r) => info!(count = r.len(), "recent reports"),
        Err(err) => warn!(kind = ?err.kind(), "reports unavailable: {err}"),
    }
    match predictions {
        Ok(p) => info!(count = p.len(), "predictions"),
        Err(err) => warn!(kind = ?err.kind(), "predictions unavailable: {err}"),
    }
    match careers {
        Ok(c) => {
            for career in c.iter().take(3) {
                info!(career = %career.career_path, score = career.match_score, "career match");
            }
        }
        Err(err) => warn!(kind = ?err.kind(), "career recommendations unavailable: {err}"),
    }
    match plans {
        Ok(p) => info!(count = p.len(), "active study plans"),
        Err(err) => warn!(kind = ?err.kind(), "study plans unavailable: {err}"),
    }

    Ok(())
}
