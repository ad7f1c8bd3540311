use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Client as ReqwestClient;
use smartpath_domain::constants::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use smartpath_domain::{ApiError, ClientConfig};
use tracing::debug;

use crate::api::normalize::RawResponse;
use crate::api::request::{MultipartForm, WireBody, WireRequest};
use crate::api::transport::Transport;
use crate::errors::InfraError;

/// reqwest-backed transport.
///
/// Sends each request exactly once. Per-call deadlines are enforced above
/// this layer by the timeout guard; only the connect phase is bounded here.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Client using the user agent and connect timeout from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout())
            .build()
    }

    /// Send `request` once and collect status, content type and body.
    pub async fn send(&self, request: WireRequest) -> Result<RawResponse, ApiError> {
        let WireRequest { method, url, headers, body } = request;
        debug!(%method, %url, "sending HTTP request");

        let mut builder = self.client.request(method.clone(), url.clone()).headers(headers);
        builder = match body {
            WireBody::Empty => builder,
            WireBody::Json(bytes) => builder.body(bytes),
            WireBody::Multipart(form) => builder.multipart(encode_multipart(form)?),
        };

        let response = builder.send().await.map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            ApiError::from(InfraError::from(err))
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|err| ApiError::from(InfraError::from(err)))?;

        debug!(%method, %url, %status, bytes = body.len(), "received HTTP response");

        Ok(RawResponse { status: status.as_u16(), content_type, body: body.to_vec() })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: WireRequest) -> Result<RawResponse, ApiError> {
        self.send(request).await
    }
}

fn encode_multipart(form: MultipartForm) -> Result<Form, ApiError> {
    let (texts, files) = form.into_parts();
    let mut encoded = Form::new();

    for (name, value) in texts {
        encoded = encoded.text(name, value);
    }

    for (name, file) in files {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime_type)
            .map_err(|err| ApiError::Config(format!("Invalid MIME type for '{name}': {err}")))?;
        encoded = encoded.part(name, part);
    }

    Ok(encoded)
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    connect_timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }
    }
}

impl HttpClientBuilder {
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, ApiError> {
        let mut builder = ReqwestClient::builder().connect_timeout(self.connect_timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(HttpClient { client })
    }
}
