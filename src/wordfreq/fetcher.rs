//! Document retrieval.

use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the document body from `url` as text. Any non-2xx status or
/// transport error aborts the run; there is no retry.
pub async fn fetch_text(url: &Url) -> Result<String> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    debug!("GET {}", url);
    let response = client.get(url.clone()).send().await?;
    let body = response.error_for_status()?.text().await?;

    info!("fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
