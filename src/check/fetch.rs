//! Single bounded GET of the target URL.

use super::FetchError;
use bytes::Bytes;
use std::time::Duration;

/// Fetch `url` once and return the full response body.
///
/// `timeout` bounds the whole request, body included. The response status is
/// not judged; whatever body comes back is returned for inspection. The
/// response is dropped on every path, which returns its connection.
pub async fn fetch_content(url: &str, timeout: Duration) -> Result<Bytes, FetchError> {
    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(transport)?;

    let response = client.get(url).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(url, status = status.as_u16(), "Target returned non-success status");
    }

    response
        .bytes()
        .await
        .map_err(|source| FetchError::ReadBody {
            url: url.to_string(),
            source,
        })
}
