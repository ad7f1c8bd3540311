use std::sync::Arc;

use smartpath_domain::{AcademicFeedback, ApiResult, LearningInsight};
use tracing::instrument;

use crate::api::client::ApiClient;
use crate::api::request::RequestDescriptor;

/// AI feedback, learning tips and academic analysis
pub struct InsightsApi {
    client: Arc<ApiClient>,
}

impl InsightsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn feedback(&self) -> ApiResult<AcademicFeedback> {
        self.client.get("/insights/feedback").await
    }

    #[instrument(skip(self))]
    pub async fn learning_tips(&self, limit: Option<u32>) -> ApiResult<Vec<LearningInsight>> {
        self.client
            .send(RequestDescriptor::get("/insights/learning-tips").query_opt("limit", limit))
            .await
    }

    #[instrument(skip(self))]
    pub async fn academic_analysis(&self, limit: Option<u32>) -> ApiResult<Vec<LearningInsight>> {
        self.client
            .send(RequestDescriptor::get("/insights/academic-analysis").query_opt("limit", limit))
            .await
    }
}
