//! Dispatch of the resolved video to yt-dlp.
//!
//! yt-dlp handles the HLS/MP4 fetching and muxing; only its exit code is
//! interpreted here. Its stdout/stderr are inherited so download progress
//! shows up directly in the terminal.

use tracing::{debug, info};
use which::which;

use crate::error::{Error, Result};

/// Output template: `2025-04-23_My_Meeting_Title.mp4`.
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "%(upload_date>%Y-%m-%d)s_%(title)s.%(ext)s";

const YTDLP_BIN: &str = "yt-dlp";

/// One yt-dlp invocation: source URL, auth header, output template.
pub struct DownloadJob {
    source_url: String,
    auth_header: String,
    output_template: String,
}

impl DownloadJob {
    pub fn new(source_url: String, auth_header: String) -> Self {
        Self {
            source_url,
            auth_header,
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
        }
    }

    pub fn with_output_template(mut self, template: String) -> Self {
        self.output_template = template;
        self
    }

    /// The argument vector passed to yt-dlp. The credential rides along as
    /// a custom header because the CDN expects the same bearer token as
    /// the watch-page endpoint.
    pub fn args(&self) -> Vec<String> {
        vec![
            "--add-header".to_string(),
            format!("Authorization: {}", self.auth_header),
            "-o".to_string(),
            self.output_template.clone(),
            self.source_url.clone(),
        ]
    }

    /// Spawns yt-dlp and waits for it to exit. The child is always reaped
    /// before this returns.
    pub async fn run(&self) -> Result<()> {
        if which(YTDLP_BIN).is_err() {
            return Err(Error::DownloaderMissing);
        }

        debug!("Invoking {} with args {:?}", YTDLP_BIN, self.args());
        let status = tokio::process::Command::new(YTDLP_BIN)
            .args(self.args())
            .status()
            .await
            .map_err(|err| Error::Other(err.into()))?;

        if status.success() {
            info!("yt-dlp finished successfully");
            Ok(())
        } else {
            Err(Error::Downloader { status })
        }
    }
}
