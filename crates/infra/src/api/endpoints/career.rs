use std::sync::Arc;

use smartpath_domain::{ApiResult, CareerQuiz, CareerRecommendation};
use tracing::instrument;

use crate::api::client::ApiClient;

/// Career guidance endpoints
pub struct CareerApi {
    client: Arc<ApiClient>,
}

impl CareerApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn recommendations(&self) -> ApiResult<Vec<CareerRecommendation>> {
        self.client.get("/career/recommendations").await
    }

    /// Submit interest quiz answers; returns freshly generated matches
    #[instrument(skip_all)]
    pub async fn quiz(&self, answers: &CareerQuiz) -> ApiResult<Vec<CareerRecommendation>> {
        self.client.post("/career/quiz", answers).await
    }

    #[instrument(skip(self))]
    pub async fn details(&self, recommendation_id: i64) -> ApiResult<CareerRecommendation> {
        self.client.get(&format!("/career/{recommendation_id}/details")).await
    }
}
