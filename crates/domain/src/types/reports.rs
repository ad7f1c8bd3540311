//! Academic report payloads

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;

/// Subject name → letter grade (e.g. `"Mathematics" → "B+"`)
pub type GradeMap = BTreeMap<String, String>;

/// `POST /reports/ocr-preview`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrPreview {
    #[serde(default)]
    pub extracted_text: String,
    #[serde(default)]
    pub grades: GradeMap,
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Form fields sent alongside the file on `POST /reports/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportUploadFields {
    pub term: String,
    pub year: i32,
    #[serde(with = "timestamp")]
    pub report_date: DateTime<Utc>,
}

/// `POST /reports/upload-json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportUpload {
    pub term: String,
    pub year: i32,
    #[serde(with = "timestamp")]
    pub report_date: DateTime<Utc>,
    pub grades_json: GradeMap,
}

/// Stored academic report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub report_id: i64,
    pub user_id: i64,
    #[serde(with = "timestamp")]
    pub report_date: DateTime<Utc>,
    pub term: String,
    pub year: i32,
    #[serde(default)]
    pub grades_json: GradeMap,
    #[serde(default)]
    pub overall_gpa: Option<f64>,
    #[serde(with = "timestamp")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub processed: bool,
}

/// `POST /reports/analyze?report_id=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub report_id: i64,
    pub overall_gpa: f64,
    pub subject_count: u32,
    #[serde(default)]
    pub strong_subjects: Vec<String>,
    #[serde(default)]
    pub weak_subjects: Vec<String>,
    #[serde(default)]
    pub trend_analysis: BTreeMap<String, String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}
