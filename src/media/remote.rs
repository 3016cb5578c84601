// SPDX-License-Identifier: MPL-2.0
//! Download of remote placeholder images for display.
//!
//! Only the presentation layer calls into this module; the gallery store
//! treats remote references as opaque strings.

use crate::error::{Error, Result};
use std::time::Duration;

/// Upper bound on a placeholder download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Refuse bodies larger than this; placeholders are small thumbnails.
const MAX_PLACEHOLDER_BYTES: u64 = 16 * 1024 * 1024;

/// Fetches the bytes behind a remote image reference.
///
/// # Errors
///
/// Returns [`Error::Fetch`] when the client cannot be built, the request
/// fails, the server answers with a non-success status or the body exceeds
/// the size limit.
pub async fn fetch_image_bytes(url: String) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    if response
        .content_length()
        .is_some_and(|len| len > MAX_PLACEHOLDER_BYTES)
    {
        return Err(Error::Fetch(format!(
            "response too large for a placeholder: {url}"
        )));
    }

    let bytes = response.bytes().await?;
    if bytes.len() as u64 > MAX_PLACEHOLDER_BYTES {
        return Err(Error::Fetch(format!(
            "response too large for a placeholder: {url}"
        )));
    }

    tracing::debug!(%url, bytes = bytes.len(), "fetched placeholder");
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_a_fetch_error() {
        // Port 1 on loopback is not expected to accept connections.
        let result = fetch_image_bytes("http://127.0.0.1:1/placeholder.png".to_string()).await;
        assert!(matches!(result, Err(Error::Fetch(_))));
    }

    #[tokio::test]
    async fn malformed_url_is_a_fetch_error() {
        let result = fetch_image_bytes("not a url".to_string()).await;
        assert!(matches!(result, Err(Error::Fetch(_))));
    }
}
