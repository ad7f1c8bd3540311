//! AI insight payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Feedback,
    Tip,
    Analysis,
    Recommendation,
    Motivation,
}

crate::impl_wire_enum_conversions!(InsightType {
    Feedback => "feedback",
    Tip => "tip",
    Analysis => "analysis",
    Recommendation => "recommendation",
    Motivation => "motivation",
});

/// `GET /insights/feedback`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicFeedback {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub motivational_message: String,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// One row of `GET /insights/learning-tips` or `/insights/academic-analysis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningInsight {
    pub insight_id: i64,
    pub insight_type: InsightType,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default, alias = "metadata_json")]
    pub metadata: Option<Value>,
    #[serde(with = "timestamp")]
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}
