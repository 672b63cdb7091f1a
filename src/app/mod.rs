//! One download run: collect → extract → normalize → resolve → dispatch.

use tracing::info;

use crate::api::WatchPageClient;
use crate::auth::normalize_token;
use crate::cli::{self, Cli};
use crate::download::DownloadJob;
use crate::error::{Error, Result};
use crate::meeting::MeetingIdExtractor;

pub async fn run(cli: Cli) -> Result<()> {
    let meeting_url = match cli::provided(cli.url) {
        Some(url) => url,
        None => cli::prompt_meeting_url()?,
    };
    let raw_token = match cli::provided(cli.token) {
        Some(token) => token,
        None => cli::prompt_token()?,
    };

    let extractor = MeetingIdExtractor::new()?;
    let meeting_id = extractor
        .extract(&meeting_url)
        .ok_or(Error::MeetingIdNotFound)?;
    info!("Resolved meeting ID: {meeting_id}");

    let auth = normalize_token(&raw_token);

    let client = WatchPageClient::new()?;
    let source_url = client.fetch_source_url(meeting_id, &auth).await?;
    info!("Resolved video source: {source_url}");

    let mut job = DownloadJob::new(source_url, auth);
    if let Some(template) = cli.output {
        job = job.with_output_template(template);
    }

    println!("Downloading video with yt-dlp...");
    job.run().await?;
    println!("Download complete.");

    Ok(())
}
