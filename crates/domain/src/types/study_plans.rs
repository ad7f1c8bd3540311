//! Study plan payloads

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Completed,
    Paused,
    Cancelled,
}

crate::impl_wire_enum_conversions!(PlanStatus {
    Active => "active",
    Completed => "completed",
    Paused => "paused",
    Cancelled => "cancelled",
});

/// `POST /study-plans/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanRequest {
    pub subjects: Vec<String>,
    pub available_hours_per_day: f64,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    pub exam_date: Option<DateTime<Utc>>,
    /// Subject → topics to emphasise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_areas: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub plan_id: i64,
    pub subject: String,
    #[serde(default)]
    pub focus_area: Option<String>,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_date: DateTime<Utc>,
    pub daily_duration_minutes: u32,
    #[serde(default)]
    pub priority: i32,
    pub status: PlanStatus,
    #[serde(default, alias = "study_strategy")]
    pub strategy: Option<String>,
    #[serde(default, alias = "weekly_schedule_json")]
    pub weekly_schedule: Option<Vec<Value>>,
    #[serde(default)]
    pub sessions: Option<Vec<StudySession>>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// `PUT /study-plans/{id}/update`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_topics: Option<Vec<String>>,
}

/// `POST /study-plans/{id}/log-session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySessionLog {
    pub subject: String,
    pub duration_minutes: u32,
    #[serde(default = "default_completed")]
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics_covered: Option<Vec<String>>,
}

const fn default_completed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub session_id: i64,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub topics_covered: Option<Vec<String>>,
}
