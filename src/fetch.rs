//! Page fetching.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use tracing::debug;

// Biletinial serves a different (and date-free) shell to obvious bots.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
const ACCEPT_LANGUAGE_TR: &str = "tr-TR,tr;q=0.9,en-US;q=0.8,en;q=0.7";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the client shared by both page fetches.
pub fn build_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_TR));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")
}

/// GET a page and return its body. Non-success statuses are errors; the
/// caller decides whether a failure is fatal.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request failed: {}", url))?;
    let body = response
        .error_for_status()
        .with_context(|| format!("error status from {}", url))?
        .text()
        .await
        .with_context(|| format!("failed to read body from {}", url))?;
    Ok(body)
}
