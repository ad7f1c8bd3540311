//! Study plan endpoints
//!
//! Generation returns one plan per subject. Pages that want a single
//! combined preview merge them themselves.

use std::sync::Arc;

use smartpath_domain::{
    ApiResult, RawPayload, StudyPlan, StudyPlanRequest, StudyPlanUpdate, StudySession,
    StudySessionLog,
};
use tracing::{debug, instrument};

use crate::api::client::ApiClient;
use crate::api::request::RequestDescriptor;
use crate::api::timeout::TimeoutCategory;

pub struct StudyPlansApi {
    client: Arc<ApiClient>,
}

impl StudyPlansApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// AI-generated plans, under the AI generation deadline
    ///
    /// # Errors
    ///
    /// Returns a timeout error if generation outlives its deadline
    #[instrument(skip_all, fields(subjects = request.subjects.len()))]
    pub async fn generate(&self, request: &StudyPlanRequest) -> ApiResult<Vec<StudyPlan>> {
        let descriptor = RequestDescriptor::post("/study-plans/generate")
            .json(request)?
            .timeout(TimeoutCategory::AiGeneration);
        let plans: Vec<StudyPlan> = self.client.send(descriptor).await?;

        debug!(plans = plans.len(), "study plans generated");
        Ok(plans)
    }

    #[instrument(skip(self))]
    pub async fn active(&self) -> ApiResult<Vec<StudyPlan>> {
        self.client.get("/study-plans/active").await
    }

    #[instrument(skip(self))]
    pub async fn all(&self) -> ApiResult<Vec<StudyPlan>> {
        self.client.get("/study-plans/all").await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, plan_id: i64) -> ApiResult<StudyPlan> {
        self.client.get(&format!("/study-plans/{plan_id}")).await
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, plan_id: i64, update: &StudyPlanUpdate) -> ApiResult<StudyPlan> {
        self.client.put(&format!("/study-plans/{plan_id}/update"), update).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, plan_id: i64) -> ApiResult<()> {
        let _: RawPayload = self.client.delete(&format!("/study-plans/{plan_id}")).await?;
        Ok(())
    }

    #[instrument(skip(self, session), fields(minutes = session.duration_minutes))]
    pub async fn log_session(
        &self,
        plan_id: i64,
        session: &StudySessionLog,
    ) -> ApiResult<StudySession> {
        self.client.post(&format!("/study-plans/{plan_id}/log-session"), session).await
    }
}
