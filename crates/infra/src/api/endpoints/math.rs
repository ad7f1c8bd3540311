use std::sync::Arc;

use smartpath_domain::{ApiResult, MathSolution};
use tracing::instrument;

use crate::api::client::ApiClient;
use crate::api::request::{FilePart, MultipartForm, RequestDescriptor};
use crate::api::timeout::TimeoutCategory;

/// Photo-of-a-problem math solver
pub struct MathApi {
    client: Arc<ApiClient>,
}

impl MathApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Solve the problem in `image`, optionally guided by `question`.
    ///
    /// Multipart upload under the AI generation deadline.
    #[instrument(skip_all, fields(file_name = %image.file_name))]
    pub async fn solve(&self, image: FilePart, question: Option<&str>) -> ApiResult<MathSolution> {
        let mut form = MultipartForm::new().file("file", image);
        if let Some(question) = question {
            form = form.text("question", question);
        }

        let descriptor = RequestDescriptor::post("/math/solve")
            .multipart(form)
            .timeout(TimeoutCategory::AiGeneration);
        self.client.send(descriptor).await
    }
}
