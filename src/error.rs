use crate::models::responses::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Reasons a remote fetch produced no books. Never leaves the source.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("fetch cancelled before completion")]
    Cancelled,
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
    #[error("error reading response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures the metrics endpoint reports to clients.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid query parameters")]
    InvalidQuery,
    #[error("Could not retrieve books data")]
    BooksUnavailable,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery => StatusCode::BAD_REQUEST,
            ApiError::BooksUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
