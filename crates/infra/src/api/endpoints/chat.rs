use std::sync::Arc;

use smartpath_domain::{ApiResult, ChatReply, ChatRequest};
use tracing::instrument;

use crate::api::client::ApiClient;

/// Tutor chat
pub struct ChatApi {
    client: Arc<ApiClient>,
}

impl ChatApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(conversation = ?request.conversation_id))]
    pub async fn send(&self, request: &ChatRequest) -> ApiResult<ChatReply> {
        self.client.post("/chat/send", request).await
    }
}
