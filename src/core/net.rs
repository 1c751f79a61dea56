use crate::core::PeError;

/// Reads the body of a response as text.
///
/// The status is not checked here; callers inspect it alongside the body.
pub(crate) async fn get_text(resp: reqwest::Response, endpoint: &str) -> Result<String, PeError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(endpoint, status, bytes = text.len(), "response body read");
    #[cfg(not(feature = "tracing"))]
    let _ = (endpoint, status);

    Ok(text)
}
