//! YouTube URL recognition and derived URLs for video media items.
//!
//! The admin form accepts any of the common YouTube URL shapes; the public
//! site needs only the 11-character video id to build embed and thumbnail
//! URLs.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Matches the video id in `watch?v=`, `youtu.be/`, `embed/`, and `shorts/`
/// URL shapes. Compiled once, reused forever.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^https?://
        (?:www\.|m\.)?
        (?:
            youtube\.com/watch\?(?:[^\#]*&)?v= |
            youtube\.com/embed/ |
            youtube\.com/shorts/ |
            youtu\.be/
        )
        ([A-Za-z0-9_-]{11})
        (?:[?&\#]|$)
        ",
    )
    .expect("valid regex")
});

/// Extract the 11-character video id from a YouTube URL.
///
/// Returns `None` for anything that is not a recognizable YouTube URL.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Validate a video URL, returning its video id.
pub fn validate_youtube_url(url: &str) -> Result<&str, CoreError> {
    youtube_video_id(url).ok_or_else(|| {
        CoreError::Validation(format!("not a recognizable YouTube URL: {url}"))
    })
}

/// Privacy-friendly embed URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{video_id}")
}

/// Medium-quality thumbnail URL for a video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/mqdefault.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_watch_url() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_id_from_short_url() {
        assert_eq!(
            youtube_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_id_from_embed_url() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_id_from_shorts_url() {
        assert_eq!(
            youtube_video_id("https://youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn tolerates_extra_query_params() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            youtube_video_id("https://youtu.be/dQw4w9WgXcQ?t=42"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn accepts_mobile_host() {
        assert_eq!(
            youtube_video_id("https://m.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn rejects_non_youtube_urls() {
        assert_eq!(youtube_video_id("https://vimeo.com/12345678"), None);
        assert_eq!(youtube_video_id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(youtube_video_id("not a url"), None);
    }

    #[test]
    fn rejects_malformed_ids() {
        // Too short to be a video id.
        assert_eq!(youtube_video_id("https://youtu.be/short"), None);
    }

    #[test]
    fn validate_reports_validation_error() {
        let err = validate_youtube_url("https://example.com/video").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn derived_urls() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            thumbnail_url("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg"
        );
    }
}
