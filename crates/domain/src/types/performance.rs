//! Performance dashboard payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;
use super::reports::Report;

/// Per-subject performance row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectPerformance {
    pub performance_id: i64,
    pub subject: String,
    #[serde(default)]
    pub current_grade: Option<String>,
    #[serde(default)]
    pub grade_numeric: Option<f64>,
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub strength_score: f64,
    #[serde(default)]
    pub weakness_areas: Option<Vec<String>>,
    #[serde(with = "timestamp")]
    pub last_updated: DateTime<Utc>,
}

/// `GET /performance/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceDashboard {
    pub overall_gpa: f64,
    pub total_subjects: u32,
    #[serde(default)]
    pub strong_subjects: Vec<SubjectPerformance>,
    #[serde(default)]
    pub weak_subjects: Vec<SubjectPerformance>,
    #[serde(default)]
    pub improving_subjects: Vec<String>,
    #[serde(default)]
    pub declining_subjects: Vec<String>,
    #[serde(default)]
    pub recent_reports: Vec<Report>,
}

/// `GET /performance/trends`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeTrend {
    pub subject: String,
    #[serde(default)]
    pub grades: Vec<f64>,
    #[serde(default, with = "timestamp::list")]
    pub dates: Vec<DateTime<Utc>>,
    /// `improving`, `declining` or `stable`
    pub trend: String,
    #[serde(default)]
    pub predicted_next: Option<f64>,
}

/// `GET /performance/predictions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePrediction {
    pub subject: String,
    pub current_grade: String,
    pub predicted_next_grade: String,
    /// 0.0 - 1.0
    pub confidence: f64,
    #[serde(default)]
    pub factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn test_trend_dates_are_timestamps() {
        let trend: GradeTrend = serde_json::from_str(
            r#"{"subject":"Mathematics","grades":[8.0,9.5],
                "dates":["2024-01-20T00:00:00","2024-04-18T00:00:00"],
                "trend":"improving","predicted_next":10.0}"#,
        )
        .unwrap();

        assert_eq!(trend.dates.len(), trend.grades.len());
        assert_eq!(trend.dates[1].month(), 4);
        assert_eq!(trend.predicted_next, Some(10.0));
    }
}
