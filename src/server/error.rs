//! HTTP error handling and response bodies.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{json, ser::PrettyFormatter};

use crate::RoverError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed caller input (body, date, hours).
    BadRequest(String),
    /// The photos API call failed.
    Fetch(RoverError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Fetch(e) => {
                let status = e
                    .status_override()
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = e
                    .json_body()
                    .unwrap_or_else(|| json!({ "error": e.to_string() }));
                (status, body)
            }
        };

        tracing::warn!(status = status.as_u16(), body = %body, "request failed");
        json_response(status, &body)
    }
}

impl From<RoverError> for AppError {
    fn from(err: RoverError) -> Self {
        AppError::Fetch(err)
    }
}

/// Serialize `value` with a one-space indent and tag it `application/json`.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if let Err(e) = value.serialize(&mut ser) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to encode response: {e}"),
        )
            .into_response();
    }

    (status, [(header::CONTENT_TYPE, "application/json")], buf).into_response()
}
