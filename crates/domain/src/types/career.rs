//! Career guidance payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub recommendation_id: i64,
    pub career_path: String,
    #[serde(default)]
    pub career_description: Option<String>,
    #[serde(default)]
    pub suitable_universities: Option<Vec<String>>,
    /// Free-form requirement map as produced by the recommender
    #[serde(default)]
    pub course_requirements: Option<Value>,
    pub match_score: f64,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub job_market_outlook: Option<String>,
    #[serde(with = "timestamp")]
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// `POST /career/quiz`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerQuiz {
    pub interests: Vec<String>,
    #[serde(default)]
    pub preferred_subjects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
    /// `indoor`, `outdoor` or `mixed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_environment: Option<String>,
}
