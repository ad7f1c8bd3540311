//! Flashcard endpoints

use std::sync::Arc;

use smartpath_domain::{
    ApiResult, Flashcard, FlashcardEvaluateRequest, FlashcardEvaluation, FlashcardFilter,
    FlashcardGenerateRequest, FlashcardReview, RawPayload, ReviewReceipt,
};
use tracing::{debug, instrument};

use crate::api::client::ApiClient;
use crate::api::request::RequestDescriptor;

pub struct FlashcardsApi {
    client: Arc<ApiClient>,
}

impl FlashcardsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Generate a new deck for a subject
    #[instrument(skip_all, fields(subject = %request.subject, count = request.count))]
    pub async fn generate(&self, request: &FlashcardGenerateRequest) -> ApiResult<Vec<Flashcard>> {
        let cards: Vec<Flashcard> = self.client.post("/flashcards/generate", request).await?;
        debug!(generated = cards.len(), "flashcards generated");
        Ok(cards)
    }

    /// List stored cards; unset filter fields are left to server defaults
    #[instrument(skip(self))]
    pub async fn list(&self, filter: &FlashcardFilter) -> ApiResult<Vec<Flashcard>> {
        let descriptor = RequestDescriptor::get("/flashcards/list")
            .query_opt("subject", filter.subject.as_deref())
            .query_opt("difficulty", filter.difficulty.map(|d| d.as_str()))
            .query_opt("limit", filter.limit);
        self.client.send(descriptor).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, card_id: i64) -> ApiResult<()> {
        let _: RawPayload = self.client.delete(&format!("/flashcards/{card_id}")).await?;
        Ok(())
    }

    /// Record a self-graded review
    #[instrument(skip(self, review), fields(correct = review.correct))]
    pub async fn review(&self, card_id: i64, review: &FlashcardReview) -> ApiResult<ReviewReceipt> {
        let receipt: Option<ReviewReceipt> =
            self.client.post(&format!("/flashcards/{card_id}/review"), review).await?;
        Ok(receipt.unwrap_or_default())
    }

    /// Have the server grade a free-text answer
    #[instrument(skip(self, answer))]
    pub async fn evaluate(
        &self,
        card_id: i64,
        answer: &FlashcardEvaluateRequest,
    ) -> ApiResult<FlashcardEvaluation> {
        self.client.post(&format!("/flashcards/{card_id}/evaluate"), answer).await
    }
}
