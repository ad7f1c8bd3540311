//! Academic report endpoints

use std::sync::Arc;

use smartpath_domain::{
    ApiResult, OcrPreview, RawPayload, Report, ReportAnalysis, ReportUpload, ReportUploadFields,
};
use tracing::{debug, instrument};

use crate::api::client::ApiClient;
use crate::api::request::{FilePart, MultipartForm, RequestDescriptor};
use crate::api::timeout::TimeoutCategory;

pub struct ReportsApi {
    client: Arc<ApiClient>,
}

impl ReportsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Run OCR on a report image or PDF without saving anything.
    ///
    /// Uses the OCR preview deadline.
    #[instrument(skip_all, fields(file_name = %file.file_name))]
    pub async fn ocr_preview(&self, file: FilePart) -> ApiResult<OcrPreview> {
        let descriptor = RequestDescriptor::post("/reports/ocr-preview")
            .multipart(MultipartForm::new().file("file", file))
            .timeout(TimeoutCategory::OcrPreview);
        self.client.send(descriptor).await
    }

    /// Upload a report file with its term metadata
    #[instrument(skip_all, fields(file_name = %file.file_name, term = %fields.term, year = fields.year))]
    pub async fn upload(&self, file: FilePart, fields: &ReportUploadFields) -> ApiResult<Report> {
        let form_fields = [
            ("term", fields.term.clone()),
            ("year", fields.year.to_string()),
            ("report_date", fields.report_date.to_rfc3339()),
        ];
        self.client.upload_file("/reports/upload", file, form_fields).await
    }

    /// Save grades that were already extracted (or typed in)
    #[instrument(skip_all, fields(term = %report.term, year = report.year))]
    pub async fn upload_json(&self, report: &ReportUpload) -> ApiResult<Report> {
        self.client.post("/reports/upload-json", report).await
    }

    #[instrument(skip(self))]
    pub async fn history(&self, limit: Option<u32>) -> ApiResult<Vec<Report>> {
        let reports: Vec<Report> = self
            .client
            .send(RequestDescriptor::get("/reports/history").query_opt("limit", limit))
            .await?;

        debug!(count = reports.len(), "report history loaded");
        Ok(reports)
    }

    #[instrument(skip(self))]
    pub async fn analyze(&self, report_id: i64) -> ApiResult<ReportAnalysis> {
        self.client
            .send(RequestDescriptor::post("/reports/analyze").query("report_id", report_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, report_id: i64) -> ApiResult<()> {
        let _: RawPayload = self.client.delete(&format!("/reports/{report_id}")).await?;
        Ok(())
    }
}
