//! End-to-end wiring test for one download run, without touching the
//! network or spawning yt-dlp: the same pure pieces the app chains
//! together (extract → normalize → resolve → job arguments) are chained
//! here against a canned watch-page response.

use reqwest::StatusCode;
use tldv_dl::api::resolve_source_url;
use tldv_dl::auth::normalize_token;
use tldv_dl::download::DownloadJob;
use tldv_dl::error::Error;
use tldv_dl::meeting::MeetingIdExtractor;

#[test]
fn test_full_run_from_url_and_token_to_ytdlp_invocation() {
    let meeting_url = "https://app.tldv.io/meetings/680896fbc4011300134ad801?x=1";
    let raw_token = "eyJabc";

    let extractor = MeetingIdExtractor::new().unwrap();
    let meeting_id = extractor.extract(meeting_url).unwrap();
    assert_eq!(meeting_id, "680896fbc4011300134ad801");

    let auth = normalize_token(raw_token);
    assert_eq!(auth, "Bearer eyJabc");

    let response_body = r#"{"video":{"source":"https://s.example/v.mp4"}}"#;
    let source_url = resolve_source_url(StatusCode::OK, response_body).unwrap();
    assert_eq!(source_url, "https://s.example/v.mp4");

    let job = DownloadJob::new(source_url, auth);
    let args = job.args();
    assert_eq!(args.last().unwrap(), "https://s.example/v.mp4");
    assert!(args
        .windows(2)
        .any(|w| w[0] == "--add-header" && w[1] == "Authorization: Bearer eyJabc"));
}

#[test]
fn test_failures_stay_distinguishable_along_the_run() {
    let extractor = MeetingIdExtractor::new().unwrap();
    assert!(extractor.extract("https://app.tldv.io/home").is_none());

    let unauthorized = resolve_source_url(StatusCode::UNAUTHORIZED, "expired").unwrap_err();
    assert!(matches!(unauthorized, Error::Transport { .. }));
    assert!(unauthorized.to_string().contains("401"));

    let not_json = resolve_source_url(StatusCode::OK, "oops").unwrap_err();
    assert!(matches!(not_json, Error::MalformedResponse { .. }));

    let bare_string = resolve_source_url(StatusCode::OK, r#""error""#).unwrap_err();
    assert!(matches!(bare_string, Error::UnexpectedShape { .. }));

    let no_source = resolve_source_url(StatusCode::OK, r#"{"video":{}}"#).unwrap_err();
    assert!(matches!(no_source, Error::SourceMissing { .. }));
}
