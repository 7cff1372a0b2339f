use crate::core::RoverError;

/// Turn a non-2xx response into [`RoverError::Status`], keeping a JSON body if there is one.
pub(crate) async fn ensure_success(
    resp: reqwest::Response,
) -> Result<reqwest::Response, RoverError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    // The query carries the API key; keep it out of error messages.
    let mut url = resp.url().clone();
    url.set_query(None);
    let url = url.to_string();
    // The body is best effort here; the status is what gets reported.
    let body = resp
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok());

    #[cfg(feature = "tracing")]
    tracing::warn!(status = status.as_u16(), %url, "upstream returned non-success status");

    Err(RoverError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("").to_string(),
        url,
        body,
    })
}

/// Read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, RoverError> {
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(bytes = text.len(), "read response body");

    Ok(text)
}
