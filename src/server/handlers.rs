//! HTTP handlers for the two photo routes.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{Method, StatusCode},
    response::Response,
};
use chrono::Local;
use serde::Deserialize;

use super::error::{AppError, json_response};
use super::lookback::lookback;
use super::state::AppState;
use crate::EarthDate;

/// Result type for handlers.
pub type HandlerResult = Result<Response, AppError>;

/// Body accepted by both routes; every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct PhotosRequest {
    #[serde(default)]
    pub date: Option<EarthDate>,
    /// Only read by `/past`.
    #[serde(default)]
    pub hours: Option<f64>,
}

/// ANY /
///
/// Photos for `date`, or today when the body is empty or has no date.
#[tracing::instrument(skip_all)]
pub async fn photos(State(state): State<AppState>, body: Bytes) -> HandlerResult {
    let request = parse_request(&body)?;
    respond_with_photos(&state, request.date).await
}

/// POST /past with `{"hours": N}`, any other method with `?h=N`.
///
/// Photos for the earth date `|N|` hours before now.
#[tracing::instrument(skip_all, fields(%method))]
pub async fn past(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> HandlerResult {
    let hours = parse_past_hours(&method, query.as_deref(), &body)?;
    let delta = lookback(hours)
        .ok_or_else(|| AppError::BadRequest(format!("hours out of range: {hours}")))?;
    let target = Local::now()
        .checked_sub_signed(delta)
        .ok_or_else(|| AppError::BadRequest(format!("hours out of range: {hours}")))?;

    respond_with_photos(&state, Some(target.into())).await
}

async fn respond_with_photos(state: &AppState, date: Option<EarthDate>) -> HandlerResult {
    let photos = state.client.fetch_photos(date).await?;
    tracing::debug!(count = photos.len(), "returning photos");
    Ok(json_response(StatusCode::OK, &photos))
}

fn parse_request(body: &[u8]) -> Result<PhotosRequest, AppError> {
    // At bare minimum "{}".
    if body.len() < 2 {
        return Ok(PhotosRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

fn parse_past_hours(method: &Method, query: Option<&str>, body: &[u8]) -> Result<f64, AppError> {
    if method == Method::POST {
        let request: PhotosRequest =
            serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
        return Ok(request.hours.unwrap_or_default());
    }

    let raw = query
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(k, _)| k == "h")
                .map(|(_, v)| v.into_owned())
        })
        .unwrap_or_default();

    raw.parse::<f64>()
        .map_err(|e| AppError::BadRequest(format!("invalid hours {raw:?}: {e}")))
}
