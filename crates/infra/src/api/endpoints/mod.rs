//! Feature-area facades over [`ApiClient`]
//!
//! Each facade maps its operations one-to-one onto client calls with a
//! fixed path, method, payload shape and timeout category. Facades hold no
//! state of their own; they all share one client, and therefore one token
//! store.

mod auth;
mod career;
mod chat;
mod flashcards;
mod health;
mod insights;
mod math;
mod performance;
mod relationships;
mod reports;
mod study_plans;

use std::sync::Arc;

use smartpath_domain::{ApiResult, ClientConfig};

pub use auth::AuthApi;
pub use career::CareerApi;
pub use chat::ChatApi;
pub use flashcards::FlashcardsApi;
pub use health::HealthApi;
pub use insights::InsightsApi;
pub use math::MathApi;
pub use performance::PerformanceApi;
pub use relationships::RelationshipsApi;
pub use reports::ReportsApi;
pub use study_plans::StudyPlansApi;

use super::client::ApiClient;

/// Every facade, wired to a single shared client
pub struct SmartPathApi {
    client: Arc<ApiClient>,
    pub auth: AuthApi,
    pub reports: ReportsApi,
    pub performance: PerformanceApi,
    pub flashcards: FlashcardsApi,
    pub career: CareerApi,
    pub study_plans: StudyPlansApi,
    pub insights: InsightsApi,
    pub relationships: RelationshipsApi,
    pub math: MathApi,
    pub chat: ChatApi,
    pub health: HealthApi,
}

impl SmartPathApi {
    pub fn new(client: ApiClient) -> Self {
        Self::from_shared(Arc::new(client))
    }

    pub fn from_shared(client: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthApi::new(Arc::clone(&client)),
            reports: ReportsApi::new(Arc::clone(&client)),
            performance: PerformanceApi::new(Arc::clone(&client)),
            flashcards: FlashcardsApi::new(Arc::clone(&client)),
            career: CareerApi::new(Arc::clone(&client)),
            study_plans: StudyPlansApi::new(Arc::clone(&client)),
            insights: InsightsApi::new(Arc::clone(&client)),
            relationships: RelationshipsApi::new(Arc::clone(&client)),
            math: MathApi::new(Arc::clone(&client)),
            chat: ChatApi::new(Arc::clone(&client)),
            health: HealthApi::new(Arc::clone(&client)),
            client,
        }
    }

    /// Build the HTTP client described by `config` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` for an invalid base URL or an unusable
    /// storage backend.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::new(ApiClient::from_config(config)?))
    }

    /// The shared client, for calls no facade covers
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}

impl std::fmt::Debug for SmartPathApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartPathApi").field("client", &self.client).finish_non_exhaustive()
    }
}
