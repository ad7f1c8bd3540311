//! End-to-end client behavior against a mock backend
//!
//! Covers credential attachment, error classification, deadlines,
//! cancellation and concurrent calls through the public facades.

mod support;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::json;
use smartpath_domain::{
    ApiError, ApiErrorKind, LoginRequest, PerformanceDashboard, RegisterRequest, ReportUploadFields,
};
use smartpath_infra::{RequestDescriptor, TimeoutCategory};
use support::{api_path, envelope, header, png, report_json, TestBackend};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header as header_eq, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn login_token_is_attached_until_logout() {
    let backend = TestBackend::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .and(body_json(json!({ "email": "amina@example.com", "password": "hunter22" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "tok-123", "token_type": "bearer" })),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("/reports/history")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([report_json(1)])))
        .mount(&backend.server)
        .await;

    let token = backend
        .api
        .auth
        .login(&LoginRequest::new("amina@example.com", "hunter22"))
        .await
        .expect("login should succeed");
    assert_eq!(token.access_token, "tok-123");
    assert!(backend.api.auth.is_authenticated());

    let login = backend.last_request().await;
    assert_eq!(header(&login, "authorization"), None, "login is a public call");

    let reports = backend.api.reports.history(None).await.expect("history should load");
    assert_eq!(reports.len(), 1);
    let history = backend.last_request().await;
    assert_eq!(header(&history, "authorization"), Some("Bearer tok-123"));
    assert_eq!(header(&history, "content-type"), None, "GET carries no body");

    backend.api.auth.logout();
    assert!(!backend.api.auth.is_authenticated());

    backend.api.reports.history(None).await.expect("history should still load");
    let anonymous = backend.last_request().await;
    assert_eq!(header(&anonymous, "authorization"), None);
}

#[tokio::test]
async fn validation_detail_is_flattened() {
    let backend = TestBackend::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("/auth/register")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                { "loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error" },
                { "loc": ["body", "password"], "msg": "field required", "type": "missing" }
            ]
        })))
        .mount(&backend.server)
        .await;

    let request = RegisterRequest {
        email: "not-an-email".into(),
        password: String::new(),
        full_name: "Amina Otieno".into(),
        user_type: Default::default(),
        grade_level: None,
        curriculum_type: Default::default(),
        phone_number: None,
        school_name: None,
    };

    let err = backend.api.auth.register(&request).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(
        err.message(),
        "body.email: value is not a valid email address, body.password: field required"
    );
    assert!(!backend.api.auth.is_authenticated());
}

#[tokio::test]
async fn detail_string_becomes_api_error() {
    let backend = TestBackend::start().await;
    backend.authenticate("expired");

    Mock::given(method("GET"))
        .and(path(api_path("/auth/profile")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Could not validate credentials" })),
        )
        .mount(&backend.server)
        .await;

    let err = backend.api.auth.profile().await.unwrap_err();
    assert_eq!(err, ApiError::Api { status: 401, message: "Could not validate credentials".into() });
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn plain_text_error_body_is_the_message() {
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/performance/predictions")))
        .respond_with(
            ResponseTemplate::new(500).set_body_raw("Internal Server Error", "text/plain; charset=utf-8"),
        )
        .mount(&backend.server)
        .await;

    let err = backend.api.performance.predictions().await.unwrap_err();
    assert_eq!(err, ApiError::Api { status: 500, message: "Internal Server Error".into() });
}

#[tokio::test]
async fn json_error_without_message_reports_status() {
    let backend = TestBackend::start().await;

    Mock::given(method("DELETE"))
        .and(path(api_path("/reports/9")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "success": false })))
        .mount(&backend.server)
        .await;

    let err = backend.api.reports.delete(9).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Unknown);
    assert_eq!(err.message(), "Request failed with status 404");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/performance/dashboard")))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"overall_gpa\": 9.", "application/json"))
        .mount(&backend.server)
        .await;

    let err = backend.api.performance.dashboard().await.unwrap_err();
    assert_eq!(err, ApiError::Parse("invalid JSON response from server".into()));
}

#[tokio::test]
async fn enveloped_and_bare_payloads_decode_alike() {
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/reports/history")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([report_json(3)]))))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("/reports/analyze")))
        .and(query_param("report_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "report_id": 3,
            "overall_gpa": 10.5,
            "subject_count": 2,
            "strong_subjects": ["Mathematics"],
            "weak_subjects": [],
            "recommendations": ["Keep practising past papers"]
        })))
        .mount(&backend.server)
        .await;

    let reports = backend.api.reports.history(Some(5)).await.expect("enveloped history");
    assert_eq!(reports[0].report_id, 3);
    let history = backend.last_request().await;
    assert_eq!(history.url.query(), Some("limit=5"));

    let analysis = backend.api.reports.analyze(3).await.expect("bare analysis");
    assert_eq!(analysis.strong_subjects, vec!["Mathematics".to_string()]);
}

#[tokio::test]
async fn slow_response_times_out() {
    let backend = TestBackend::with_deadline(Duration::from_millis(100)).await;

    Mock::given(method("GET"))
        .and(path(api_path("/performance/dashboard")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(support::dashboard_json())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&backend.server)
        .await;

    let err = backend.api.performance.dashboard().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Timeout);
    assert_eq!(err.message(), "Request timeout — the server is taking too long to respond");
}

#[tokio::test]
async fn ocr_preview_timeout_names_the_operation() {
    let backend = TestBackend::with_deadline(Duration::from_millis(100)).await;

    Mock::given(method("POST"))
        .and(path(api_path("/reports/ocr-preview")))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&backend.server)
        .await;

    let err = backend.api.reports.ocr_preview(png("report.png")).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Timeout);
    assert!(err.message().starts_with("OCR preview timeout"), "got {}", err.message());
}

#[tokio::test]
async fn upload_sends_multipart_with_credential() {
    let backend = TestBackend::start().await;
    backend.authenticate("tok-upload");

    Mock::given(method("POST"))
        .and(path(api_path("/reports/upload")))
        .and(header_eq("authorization", "Bearer tok-upload"))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(report_json(11))))
        .expect(1)
        .mount(&backend.server)
        .await;

    let fields = ReportUploadFields {
        term: "Term 2".into(),
        year: 2024,
        report_date: Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap(),
    };
    let report = backend.api.reports.upload(png("term2.png"), &fields).await.expect("upload");
    assert_eq!(report.report_id, 11);

    let request = backend.last_request().await;
    let content_type = header(&request, "content-type").expect("transport sets the boundary");
    assert!(content_type.starts_with("multipart/form-data; boundary="), "got {content_type}");

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"file\"; filename=\"term2.png\""));
    assert!(body.contains("name=\"term\""));
    assert!(body.contains("Term 2"));
    assert!(body.contains("name=\"year\""));
    assert!(body.contains("2024-08-01T00:00:00+00:00"));
}

#[tokio::test]
async fn cancelled_call_does_not_affect_others() {
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/performance/dashboard")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(support::dashboard_json())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/health")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .mount(&backend.server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let client = backend.api.client();
    let (cancelled, health) = futures::join!(
        client.send_cancellable::<PerformanceDashboard>(
            RequestDescriptor::get("/performance/dashboard"),
            cancel,
        ),
        backend.api.health.check(),
    );

    assert_eq!(cancelled.unwrap_err(), ApiError::Cancelled);
    assert!(health.expect("health should succeed").is_healthy());
}

#[tokio::test]
async fn dashboard_fan_out_tolerates_partial_failure() {
    let backend = TestBackend::start().await;
    backend.authenticate("tok-fan");

    Mock::given(method("GET"))
        .and(path(api_path("/performance/dashboard")))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::dashboard_json()))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/performance/predictions")))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "detail": "Model warming up" })))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/career/recommendations")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&backend.server)
        .await;

    let (dashboard, predictions, careers) = futures::join!(
        backend.api.performance.dashboard(),
        backend.api.performance.predictions(),
        backend.api.career.recommendations(),
    );

    assert_eq!(dashboard.expect("dashboard").improving_subjects, vec!["Mathematics".to_string()]);
    let err = predictions.unwrap_err();
    assert!(err.is_transient());
    assert_eq!(err.message(), "Model warming up");
    assert!(careers.expect("careers").is_empty());

    for request in backend.requests().await {
        assert_eq!(header(&request, "authorization"), Some("Bearer tok-fan"));
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = smartpath_infra::ApiClient::builder()
        .base_url(format!("http://{addr}/api/v1"))
        .build()
        .expect("client should build");
    let err = client
        .send::<serde_json::Value>(RequestDescriptor::get("/health").timeout(TimeoutCategory::Default))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Network);
}
