#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use smartpath_infra::{ApiClient, FilePart, SmartPathApi, TimeoutPolicy, TokenStore};
use tracing_subscriber::EnvFilter;
use wiremock::{MockServer, Request};

/// Versioned API prefix the mock server answers under
pub const API_PREFIX: &str = "/api/v1";

/// Mock backend plus a facade set pointed at it.
pub struct TestBackend {
    pub server: MockServer,
    pub api: SmartPathApi,
}

impl TestBackend {
    /// Backend with the production deadline table.
    pub async fn start() -> Self {
        Self::with_timeouts(TimeoutPolicy::default()).await
    }

    /// Backend whose every call shares one short deadline.
    pub async fn with_deadline(deadline: Duration) -> Self {
        Self::with_timeouts(TimeoutPolicy::uniform(deadline)).await
    }

    async fn with_timeouts(timeouts: TimeoutPolicy) -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let client = client_for(&server, timeouts, Arc::new(TokenStore::in_memory()));
        Self { server, api: SmartPathApi::new(client) }
    }

    /// Store a credential as if a previous login succeeded.
    pub fn authenticate(&self, token: &str) {
        self.api.client().tokens().set(Some(token));
    }

    /// Every request the mock server has seen, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// The most recent request the mock server has seen.
    pub async fn last_request(&self) -> Request {
        self.requests().await.pop().expect("mock server should have received a request")
    }
}

/// `RUST_LOG=smartpath_infra=debug cargo test` shows client spans.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn base_url(server: &MockServer) -> String {
    format!("{}{API_PREFIX}", server.uri())
}

/// Full mock path for an API route (`/auth/login` → `/api/v1/auth/login`).
pub fn api_path(route: &str) -> String {
    format!("{API_PREFIX}{route}")
}

pub fn client_for(server: &MockServer, timeouts: TimeoutPolicy, tokens: Arc<TokenStore>) -> ApiClient {
    ApiClient::builder()
        .base_url(base_url(server))
        .timeouts(timeouts)
        .tokens(tokens)
        .build()
        .expect("client should build against mock server")
}

/// Message envelope the backend wraps most payloads in.
pub fn envelope(data: Value) -> Value {
    json!({ "message": "ok", "success": true, "data": data })
}

pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|value| value.to_str().ok())
}

pub fn png(file_name: &str) -> FilePart {
    FilePart::new(file_name, "image/png", vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a])
}

pub fn report_json(report_id: i64) -> Value {
    json!({
        "report_id": report_id,
        "user_id": 7,
        "report_date": "2024-04-01T00:00:00",
        "term": "Term 1",
        "year": 2024,
        "grades_json": { "Mathematics": "A-", "English": "B+" },
        "overall_gpa": 10.5,
        "uploaded_at": "2024-04-02T08:15:00",
        "processed": true
    })
}

pub fn dashboard_json() -> Value {
    json!({
        "overall_gpa": 9.2,
        "total_subjects": 8,
        "strong_subjects": [],
        "weak_subjects": [],
        "improving_subjects": ["Mathematics"],
        "declining_subjects": [],
        "recent_reports": [report_json(1)]
    })
}
