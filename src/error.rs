//! Error taxonomy for a single download run.
//!
//! Every failure is terminal: the run reports one of these and exits
//! non-zero. Nothing is retried.

use std::process::ExitStatus;

use reqwest::StatusCode;

/// Errors surfaced to the user, grouped by which step of the run failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied URL has no `/meetings/<id>` path segment.
    #[error("could not extract a meeting ID from the supplied URL")]
    MeetingIdNotFound,

    /// The watch-page endpoint answered with a non-2xx status.
    #[error("watch-page request failed with HTTP {status}:\n{body}")]
    Transport { status: StatusCode, body: String },

    /// The request itself failed (DNS, TLS, connection reset, ...).
    #[error("watch-page request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body is not JSON at all.
    #[error("received a non-JSON response from the watch-page endpoint:\n{body}")]
    MalformedResponse { body: String },

    /// The body parsed as JSON but is not an object (e.g. a bare string).
    #[error("unexpected watch-page response ({value}); expected a JSON object")]
    UnexpectedShape { value: String },

    /// The response object lacks `video.source`. Carries the full decoded
    /// structure so an expired token or API change is diagnosable.
    #[error("video source URL not found in the watch-page response:\n{body}")]
    SourceMissing { body: String },

    /// yt-dlp ran but exited non-zero.
    #[error("yt-dlp failed ({status}); the stream may be unsupported or the token expired")]
    Downloader { status: ExitStatus },

    /// yt-dlp is not installed or not on PATH.
    #[error(
        "yt-dlp not found in PATH. Install it from https://github.com/yt-dlp/yt-dlp \
         (ffmpeg is also required for HLS streams)"
    )]
    DownloaderMissing,

    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Anything not covered above.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
