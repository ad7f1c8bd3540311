use std::sync::Arc;

use smartpath_domain::{ApiResult, GradeTrend, PerformanceDashboard, PerformancePrediction};
use tracing::instrument;

use crate::api::client::ApiClient;
use crate::api::request::RequestDescriptor;

/// Grade dashboard, per-subject trends and next-term predictions
pub struct PerformanceApi {
    client: Arc<ApiClient>,
}

impl PerformanceApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> ApiResult<PerformanceDashboard> {
        self.client.get("/performance/dashboard").await
    }

    /// Trends for every subject, or only `subject` when given
    #[instrument(skip(self))]
    pub async fn trends(&self, subject: Option<&str>) -> ApiResult<Vec<GradeTrend>> {
        self.client
            .send(RequestDescriptor::get("/performance/trends").query_opt("subject", subject))
            .await
    }

    #[instrument(skip(self))]
    pub async fn predictions(&self) -> ApiResult<Vec<PerformancePrediction>> {
        self.client.get("/performance/predictions").await
    }
}
