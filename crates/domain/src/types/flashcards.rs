//! Flashcard payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

crate::impl_wire_enum_conversions!(Difficulty {
    Easy => "easy",
    Medium => "medium",
    Hard => "hard",
});

/// `POST /flashcards/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardGenerateRequest {
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub count: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<u8>,
}

impl FlashcardGenerateRequest {
    /// Five cards for `subject`, the server default
    pub fn for_subject(subject: impl Into<String>) -> Self {
        Self { subject: subject.into(), topic: None, count: 5, difficulty: None, grade_level: None }
    }
}

/// Query filters for `GET /flashcards/list`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardFilter {
    pub subject: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub card_id: i64,
    pub subject: String,
    #[serde(default)]
    pub topic: Option<String>,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub times_reviewed: u32,
    #[serde(default)]
    pub times_correct: u32,
    #[serde(default, with = "timestamp::option")]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub next_review_date: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Percentage, 0 - 100
    #[serde(default)]
    pub mastery_level: f64,
    #[serde(default)]
    pub review_count: u32,
}

/// `POST /flashcards/{id}/review`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardReview {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
}

/// Normalized review acknowledgement (`data` of the message envelope)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReceipt {
    #[serde(default)]
    pub review_id: Option<i64>,
}

/// `POST /flashcards/{id}/evaluate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardEvaluateRequest {
    pub user_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardEvaluation {
    pub correct: bool,
    /// 0.0 - 1.0
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub mastery_level: Option<f64>,
}
