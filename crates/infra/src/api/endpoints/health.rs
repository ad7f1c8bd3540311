use std::sync::Arc;

use smartpath_domain::{ApiResult, HealthStatus};
use tracing::{info, instrument, warn};

use crate::api::client::ApiClient;
use crate::api::request::RequestDescriptor;

/// Backend liveness probe
pub struct HealthApi {
    client: Arc<ApiClient>,
}

impl HealthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /health` without credentials
    #[instrument(skip(self))]
    pub async fn check(&self) -> ApiResult<HealthStatus> {
        let status: HealthStatus =
            self.client.send(RequestDescriptor::get("/health").public()).await?;

        if status.is_healthy() {
            info!("API is healthy");
        } else {
            warn!(status = %status.status, "API reported degraded status");
        }
        Ok(status)
    }
}
