//! Client for the TL;DV watch-page endpoint.
//!
//! One GET per run. The response is consumed as raw text so that every
//! failure mode can surface the body to the user.

use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://gw.tldv.io";

pub struct WatchPageClient {
    client: Client,
    base_url: String,
}

impl WatchPageClient {
    pub fn new() -> Result<Self> {
        let base_url =
            std::env::var("TLDV_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, base_url })
    }

    /// Resolves the playable source URL for a meeting.
    ///
    /// Transcript retrieval is disabled; only the video metadata is needed.
    pub async fn fetch_source_url(&self, meeting_id: &str, auth: &str) -> Result<String> {
        let url = format!(
            "{}/v1/meetings/{}/watch-page?noTranscript=true",
            self.base_url, meeting_id
        );
        debug!("Fetching watch page: {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", auth)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        resolve_source_url(status, &body)
    }
}

/// Digs `video.source` out of a watch-page response.
///
/// Anything beyond that single field is deliberately ignored so unrelated
/// API additions cannot break the tool. The failure modes stay distinct:
/// non-2xx status, non-JSON body, JSON that is not an object, and an
/// object with no source URL each report differently.
pub fn resolve_source_url(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        return Err(Error::Transport {
            status,
            body: body.to_string(),
        });
    }

    let data: Value = serde_json::from_str(body).map_err(|_| Error::MalformedResponse {
        body: body.to_string(),
    })?;

    if !data.is_object() {
        return Err(Error::UnexpectedShape {
            value: data.to_string(),
        });
    }

    match data.pointer("/video/source").and_then(Value::as_str) {
        Some(source) if !source.is_empty() => Ok(source.to_string()),
        _ => Err(Error::SourceMissing {
            body: serde_json::to_string_pretty(&data).unwrap_or_else(|_| body.to_string()),
        }),
    }
}
