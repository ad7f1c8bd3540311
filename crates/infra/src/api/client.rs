//! The SmartPath API client
//!
//! Composes the pieces of a call in a fixed order: credential lookup,
//! request construction, dispatch under a timeout guard, normalization.
//! Every failure reaches the caller as an `ApiError`; nothing is retried.

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use smartpath_domain::{ApiError, ApiResult, ClientConfig};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use url::Url;

use super::normalize::{decode, normalize};
use super::request::{FilePart, MultipartForm, QueryValue, RequestBuilder, RequestDescriptor};
use super::timeout::{TimeoutCategory, TimeoutGuard, TimeoutPolicy};
use super::token_store::TokenStore;
use super::transport::Transport;
use crate::http::HttpClient;
use crate::storage;

/// Typed client shared by every endpoint facade
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    requests: RequestBuilder,
    tokens: Arc<TokenStore>,
    timeouts: TimeoutPolicy,
}

impl ApiClient {
    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Client with an HTTP transport and the storage backend from `config`.
    ///
    /// # Errors
    /// `ApiError::Config` when the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let transport = HttpClient::from_config(config)?;
        let tokens = TokenStore::new(storage::from_config(&config.storage));

        Self::builder()
            .base_url(config.base_url.clone())
            .transport(Arc::new(transport))
            .tokens(Arc::new(tokens))
            .build()
    }

    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    pub fn base_url(&self) -> &Url {
        self.requests.base_url()
    }

    /// `GET path`
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.send(RequestDescriptor::get(path)).await
    }

    /// `GET path?key=value&...`
    pub async fn get_with_query<R, I, K, V>(&self, path: &str, params: I) -> ApiResult<R>
    where
        R: DeserializeOwned,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        let descriptor = params
            .into_iter()
            .fold(RequestDescriptor::get(path), |descriptor, (key, value)| {
                descriptor.query(key, value)
            });
        self.send(descriptor).await
    }

    /// `POST path` with a JSON body, credential attached when present
    pub async fn post<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(RequestDescriptor::post(path).json(body)?).await
    }

    /// `POST path` without a body
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.send(RequestDescriptor::post(path)).await
    }

    /// `POST path` that never carries the credential (login, registration)
    pub async fn post_public<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(RequestDescriptor::post(path).json(body)?.public()).await
    }

    /// `PUT path` with a JSON body
    pub async fn put<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(RequestDescriptor::put(path).json(body)?).await
    }

    /// `DELETE path`
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.send(RequestDescriptor::delete(path)).await
    }

    /// Multipart `POST` of `file` (form field `file`) plus text fields,
    /// under the upload deadline.
    pub async fn upload_file<R, I, K, V>(&self, path: &str, file: FilePart, fields: I) -> ApiResult<R>
    where
        R: DeserializeOwned,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let form = fields
            .into_iter()
            .fold(MultipartForm::new(), |form, (name, value)| form.text(name, value))
            .file("file", file);
        self.send(RequestDescriptor::post(path).multipart(form).timeout(TimeoutCategory::Upload))
            .await
    }

    /// Run `descriptor` and decode the normalized payload into `R`
    pub async fn send<R: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> ApiResult<R> {
        decode(self.execute(descriptor).await?)
    }

    /// Like [`send`](Self::send), resolving to `ApiError::Cancelled` as soon
    /// as `cancel` fires. Cancelling one call never affects another.
    pub async fn send_cancellable<R: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
        cancel: CancellationToken,
    ) -> ApiResult<R> {
        decode(self.dispatch(descriptor, Some(cancel)).await?)
    }

    /// Run `descriptor` and return the normalized JSON payload
    pub async fn execute(&self, descriptor: RequestDescriptor) -> ApiResult<Value> {
        self.dispatch(descriptor, None).await
    }

    #[instrument(
        skip_all,
        fields(method = %descriptor.method, path = %descriptor.path, category = ?descriptor.timeout)
    )]
    async fn dispatch(
        &self,
        descriptor: RequestDescriptor,
        cancel: Option<CancellationToken>,
    ) -> ApiResult<Value> {
        let category = descriptor.timeout;
        let deadline = self.timeouts.deadline(category);

        let token = if descriptor.auth_required { self.tokens.get() } else { None };
        let request = self.requests.build(descriptor, token.as_deref())?;

        let guard = match cancel {
            Some(cancel) => TimeoutGuard::with_cancellation(category, deadline, cancel),
            None => TimeoutGuard::new(category, deadline),
        };

        debug!(authenticated = token.is_some(), "dispatching request");
        let started = Instant::now();

        let response = guard.run(self.transport.execute(request)).await.inspect_err(|err| {
            warn!(kind = ?err.kind(), elapsed_ms = started.elapsed().as_millis() as u64, "request failed");
        })?;

        debug!(status = response.status, elapsed_ms = started.elapsed().as_millis() as u64, "response received");

        normalize(response).inspect_err(|err| {
            warn!(status = err.status().unwrap_or_default(), kind = ?err.kind(), "request rejected");
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.requests.base_url().as_str())
            .field("timeouts", &self.timeouts)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    tokens: Option<Arc<TokenStore>>,
    timeouts: Option<TimeoutPolicy>,
}

impl ApiClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Transport to send requests through; defaults to [`HttpClient`]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Credential store; defaults to an in-memory store
    pub fn tokens(mut self, tokens: Arc<TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Deadline table; defaults to the production table
    pub fn timeouts(mut self, timeouts: TimeoutPolicy) -> Self {
        self.timeouts = Some(timeouts);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the default transport
    /// cannot be created
    pub fn build(self) -> ApiResult<ApiClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| smartpath_domain::constants::DEFAULT_BASE_URL.to_string());
        let requests = RequestBuilder::new(&base_url)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpClient::new()?),
        };

        Ok(ApiClient {
            transport,
            requests,
            tokens: self.tokens.unwrap_or_default(),
            timeouts: self.timeouts.unwrap_or_default(),
        })
    }
}
