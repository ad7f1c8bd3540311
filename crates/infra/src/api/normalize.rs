//! Raw response → payload or classified error
//!
//! The server answers in two shapes: a bare payload, or an envelope
//! `{data?, message?, success?, detail?}`. Successful envelopes are unwrapped
//! to `data`; everything else is returned as-is. Failures are classified
//! into the `ApiError` taxonomy with a human-readable message.

use serde::de::DeserializeOwned;
use serde_json::Value;
use smartpath_domain::constants::{INVALID_JSON_MESSAGE, UNKNOWN_ERROR_MESSAGE, VALIDATION_STATUS};
use smartpath_domain::{ApiError, FieldError};

/// Response as delivered by the transport, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self { status, content_type: content_type.map(str::to_string), body: body.into() }
    }

    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, Some("application/json"), body.to_string())
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// `application/json` or any `+json` media type
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|raw| {
            let media = raw.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
            media == "application/json" || media.ends_with("+json")
        })
    }
}

/// Shape of a successful JSON body
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Object carrying a `data` field; holds that field
    Wrapped(Value),
    /// Anything else; the body itself is the payload
    Bare(Value),
}

impl Envelope {
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Object(mut map) if map.contains_key("data") => {
                Self::Wrapped(map.remove("data").unwrap_or(Value::Null))
            }
            other => Self::Bare(other),
        }
    }

    pub fn into_payload(self) -> Value {
        match self {
            Self::Wrapped(payload) | Self::Bare(payload) => payload,
        }
    }
}

/// Normalize a raw response into its payload.
///
/// # Errors
/// `Parse` for malformed JSON, `Validation` for 422 field errors, `Api` for
/// other failures carrying a server message, `Unknown` otherwise.
pub fn normalize(response: RawResponse) -> Result<Value, ApiError> {
    let success = response.is_success();
    let status = response.status;

    if response.is_json() {
        let body = parse_json(&response.body)?;
        return if success {
            Ok(Envelope::classify(body).into_payload())
        } else {
            Err(classify_failure(status, &body))
        };
    }

    let text = String::from_utf8_lossy(&response.body).into_owned();
    match (success, text.trim().is_empty()) {
        (true, true) => Ok(Value::Null),
        (true, false) => Ok(Value::String(text)),
        (false, true) => {
            Err(ApiError::Unknown { status: Some(status), message: UNKNOWN_ERROR_MESSAGE.into() })
        }
        (false, false) => Err(ApiError::Api { status, message: text }),
    }
}

/// Decode a normalized payload into the caller's type.
///
/// # Errors
/// `ApiError::Parse` when the payload does not have the expected shape.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::Parse(format!("unexpected response shape: {e}")))
}

fn parse_json(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|_| ApiError::Parse(INVALID_JSON_MESSAGE.into()))
}

fn classify_failure(status: u16, body: &Value) -> ApiError {
    let object = body.as_object();
    let detail = object.and_then(|map| map.get("detail"));

    if status == VALIDATION_STATUS {
        if let Some(Value::Array(entries)) = detail {
            let fields: Vec<FieldError> = entries.iter().map(field_error).collect();
            let message = fields
                .iter()
                .map(|field| {
                    if field.path.is_empty() {
                        field.message.clone()
                    } else {
                        format!("{}: {}", field.path, field.message)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            if !message.trim().is_empty() {
                return ApiError::Validation { message, fields };
            }
        }
    }

    let message = detail
        .and_then(readable)
        .or_else(|| object.and_then(|map| map.get("message")).and_then(readable));

    match message {
        Some(message) => ApiError::Api { status, message },
        None => ApiError::Unknown {
            status: Some(status),
            message: format!("Request failed with status {status}"),
        },
    }
}

/// Message text for an error field, `None` when it carries nothing to show.
fn readable(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

fn field_error(entry: &Value) -> FieldError {
    let path = entry
        .get("loc")
        .and_then(Value::as_array)
        .map(|loc| {
            loc.iter()
                .map(|segment| match segment {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(".")
        })
        .unwrap_or_default();

    let message = match entry.get("msg") {
        Some(Value::String(msg)) => msg.clone(),
        Some(other) => other.to_string(),
        None => match entry {
            Value::String(raw) => raw.clone(),
            other => other.to_string(),
        },
    };

    FieldError { path, message }
}
