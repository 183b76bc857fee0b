//! Input acquisition: reads transcript text from stdin, a file, or a URL.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use std::io::Read;
use tracing::debug;

/// Fetches `url` and returns the response body as text.
///
/// Non-success status codes are reported as errors.
pub async fn fetch_text<C: HttpClient>(client: &C, url: &str) -> Result<String> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.text().await?)
}

/// Loads transcript text from `-` (stdin), an `http(s)://` URL, or a file
/// path.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn load_source(source: &str) -> Result<String> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read transcript from stdin")?;
        buf
    } else if source.starts_with("http://") || source.starts_with("https://") {
        let client = BasicClient::new()?;
        fetch_text(&client, source)
            .await
            .with_context(|| format!("failed to fetch transcript from {source}"))?
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read transcript file {source}"))?
    };

    debug!(bytes = text.len(), "Transcript loaded");
    Ok(text)
}
