//! Meeting ID extraction from TL;DV share URLs.

use anyhow::Result;
use regex::Regex;

/// Extracts the opaque meeting identifier from a meeting URL.
///
/// The ID is the path segment immediately after `/meetings/`, terminated by
/// the next `/`, `?`, `#` or the end of the string. Trailing slashes, query
/// parameters and fragments are all tolerated.
pub struct MeetingIdExtractor {
    id_regex: Regex,
}

impl MeetingIdExtractor {
    pub fn new() -> Result<Self> {
        let id_regex = Regex::new(r"/meetings/([^/?#]+)")?;

        Ok(Self { id_regex })
    }

    /// Returns the meeting ID, or `None` when the URL has no
    /// `/meetings/<id>` segment. Never returns an empty ID.
    pub fn extract<'a>(&self, url: &'a str) -> Option<&'a str> {
        self.id_regex
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
