//! Request descriptors and their translation into wire requests
//!
//! A [`RequestDescriptor`] says *what* to call. [`RequestBuilder`] turns it
//! into a [`WireRequest`] (absolute URL, headers, body) that a transport can
//! send without further decisions.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use smartpath_domain::ApiError;
use url::Url;

use super::timeout::TimeoutCategory;

/// Primitive query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// File attached to a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self { file_name: file_name.into(), mime_type: mime_type.into(), bytes: bytes.into() }
    }
}

/// Multipart form kept as plain data until the transport encodes it.
///
/// The transport owns the boundary, so nothing above it ever sets a
/// `Content-Type` for these bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    texts: Vec<(String, String)>,
    files: Vec<(String, FilePart)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.texts.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.files.push((name.into(), file));
        self
    }

    pub fn texts(&self) -> &[(String, String)] {
        &self.texts
    }

    pub fn files(&self) -> &[(String, FilePart)] {
        &self.files
    }

    pub(crate) fn into_parts(self) -> (Vec<(String, String)>, Vec<(String, FilePart)>) {
        (self.texts, self.files)
    }
}

/// Body of a logical call
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

/// One logical API call. Built fresh per call and consumed on dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, QueryValue)>,
    pub body: RequestBody,
    pub auth_required: bool,
    pub timeout: TimeoutCategory,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            auth_required: true,
            timeout: TimeoutCategory::Default,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add the parameter only when `value` is present
    pub fn query_opt<V: Into<QueryValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Serialize `body` as the JSON payload.
    ///
    /// # Errors
    /// `ApiError::Config` when `body` cannot be represented as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Config(format!("Failed to serialize request body: {e}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Never attach the credential, even when one is stored
    pub fn public(mut self) -> Self {
        self.auth_required = false;
        self
    }

    pub fn timeout(mut self, category: TimeoutCategory) -> Self {
        self.timeout = category;
        self
    }
}

/// Encoded body ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub enum WireBody {
    Empty,
    Json(Vec<u8>),
    Multipart(MultipartForm),
}

/// Fully resolved request
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: WireBody,
}

/// Resolves descriptors against the configured base URL
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
}

impl RequestBuilder {
    /// # Errors
    /// `ApiError::Config` when `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "Unsupported base URL scheme: {}",
                base_url.scheme()
            )));
        }
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the wire request for `descriptor`.
    ///
    /// `token` is attached as a bearer credential only when the descriptor
    /// requires auth; a missing token simply omits the header.
    ///
    /// # Errors
    /// `ApiError::Config` when the path does not form a valid URL or the
    /// token is not a valid header value.
    pub fn build(
        &self,
        descriptor: RequestDescriptor,
        token: Option<&str>,
    ) -> Result<WireRequest, ApiError> {
        let RequestDescriptor { method, path, query, body, auth_required, .. } = descriptor;

        let mut url = self.resolve(&path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, &value.to_string());
            }
        }

        let mut headers = HeaderMap::new();
        if auth_required {
            if let Some(token) = token {
                let value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| ApiError::Config("Credential is not a valid header value".into()))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        let body = match body {
            RequestBody::Empty => WireBody::Empty,
            RequestBody::Json(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                let bytes = serde_json::to_vec(&value).map_err(|e| {
                    ApiError::Config(format!("Failed to serialize request body: {e}"))
                })?;
                WireBody::Json(bytes)
            }
            RequestBody::Multipart(form) => WireBody::Multipart(form),
        };

        Ok(WireRequest { method, url, headers, body })
    }

    fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let joined = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        Url::parse(&joined).map_err(|e| ApiError::Config(format!("Invalid request path '{path}': {e}")))
    }
}
