use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt::Display;
use thiserror::Error;

/// Error body returned by the Gemini API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(status) = &self.status {
            write!(f, "{} {}: {}", self.code, status, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

impl Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid or unauthorized API key")]
    Unauthorized,

    #[error("API error: {0}")]
    ApiError(ApiErrorResponse),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Response format error: {0}")]
    ResponseError(#[from] ResponseError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// The one failure surfaced to callers instead of a fallback value.
    #[error("Failed to fetch exchange rates.")]
    RateUnavailable {
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    pub fn rate_unavailable(source: ClientError) -> Self {
        Self::RateUnavailable {
            source: Box::new(source),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Invalid response: {0}")]
    Invalid(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
}

impl ResponseError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    pub fn http_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }
}
