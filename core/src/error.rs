//! Error types for the Lokalise client.
//!
//! # Design
//! A failed API call surfaces as `Error::Api` carrying a normalized
//! `ApiError`. The normalizer only reshapes the payload; it does not classify
//! by status, so callers inspect `code` and `message` themselves. Failures that
//! never produced an API response (transport, URI templating, JSON) get their
//! own variants instead of being squeezed into the `ApiError` shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::HttpResponse;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by every collection operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with a non-2xx status.
    #[error("request failed: {0}")]
    Api(ApiError),

    /// The transport could not complete the round trip.
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A required `{!:name}` URI placeholder had no value in the parameters.
    #[error("missing required parameter `{0}`")]
    MissingParam(String),

    /// The configured host or the expanded URI is not a usable URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// A success payload did not have the shape the collection declares.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Client configuration could not be assembled.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The normalized API error, if the call reached the API and was rejected.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Normalized shape of a rejected API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{code} {message}")]
pub struct ApiError {
    pub message: String,
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// Reshape a rejected response into an `ApiError`.
    ///
    /// Lokalise nests the payload under `error`; a bare top-level object is
    /// accepted as well. When the body is not JSON at all, it becomes the
    /// message and the HTTP status becomes the code.
    pub fn from_response(response: &HttpResponse) -> Self {
        let parsed: Option<Value> = serde_json::from_str(&response.body).ok();
        match parsed {
            Some(Value::Object(mut map)) => {
                let payload = match map.remove("error") {
                    Some(Value::Object(inner)) => inner,
                    Some(Value::String(message)) => {
                        map.insert("message".to_string(), Value::String(message));
                        map
                    }
                    Some(other) => {
                        map.insert("error".to_string(), other);
                        map
                    }
                    None => map,
                };
                Self::from_payload(payload, response)
            }
            _ => Self {
                message: response.body.clone(),
                code: response.status,
                details: None,
            },
        }
    }

    fn from_payload(mut payload: serde_json::Map<String, Value>, response: &HttpResponse) -> Self {
        let message = match payload.remove("message") {
            Some(Value::String(message)) => message,
            Some(other) => other.to_string(),
            None => response.body.clone(),
        };
        let code = payload
            .get("code")
            .and_then(code_from_value)
            .unwrap_or(response.status);
        let details = payload.remove("details").filter(|d| !d.is_null());

        Self {
            message,
            code,
            details,
        }
    }
}

fn code_from_value(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
