//! Stream platform detection.
//!
//! [`StreamPlatform`] classifies a stream URL into the embed strategy the
//! frontend should use. Detection is heuristic string matching on the URL
//! host and path; unknown URLs fall back to [`StreamPlatform::Generic`].

use serde::{Deserialize, Serialize};

/// Video platform a catalogued stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StreamPlatform {
    /// YouTube video or live stream.
    Youtube,
    /// Twitch channel or VOD.
    Twitch,
    /// Facebook video.
    Facebook,
    /// Instagram live or reel.
    Instagram,
    /// Raw HLS playlist (`.m3u8`).
    Hls,
    /// RTMP ingest/playback URL.
    Rtmp,
    /// Anything else; embedded as a plain iframe.
    Generic,
}

impl StreamPlatform {
    /// Detects the platform from a stream URL.
    ///
    /// Host-based matches take priority over the HLS/RTMP path checks,
    /// and a leading `www.` is ignored. Unparseable input is `Generic`.
    #[must_use]
    pub fn detect(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("rtmp://") {
            return Self::Rtmp;
        }

        let host = host_of(&lower);
        if host.contains("youtube.com") || host.contains("youtu.be") {
            Self::Youtube
        } else if host.contains("twitch.tv") {
            Self::Twitch
        } else if host.contains("facebook.com") {
            Self::Facebook
        } else if host.contains("instagram.com") {
            Self::Instagram
        } else if lower.contains(".m3u8") || lower.contains("hls") {
            Self::Hls
        } else {
            Self::Generic
        }
    }

    /// Returns the platform as a lowercase string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Twitch => "twitch",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Hls => "hls",
            Self::Rtmp => "rtmp",
            Self::Generic => "generic",
        }
    }

    /// Parses a platform string, falling back to `Generic`.
    #[must_use]
    pub fn from_str_or_generic(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "youtube" => Self::Youtube,
            "twitch" => Self::Twitch,
            "facebook" => Self::Facebook,
            "instagram" => Self::Instagram,
            "hls" => Self::Hls,
            "rtmp" => Self::Rtmp,
            _ => Self::Generic,
        }
    }

    /// All known platforms, for the `/config/platforms` catalog endpoint.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Youtube,
            Self::Twitch,
            Self::Facebook,
            Self::Instagram,
            Self::Hls,
            Self::Rtmp,
            Self::Generic,
        ]
    }
}

/// Extracts the host portion of a URL, stripping scheme, `www.` prefix,
/// port, path, and query. Returns the input unchanged when no scheme
/// separator is present.
fn host_of(url: &str) -> &str {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host_port = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(after_scheme);
    let host = host_port.split(':').next().unwrap_or(host_port);
    host.strip_prefix("www.").unwrap_or(host)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn detects_youtube_variants() {
        assert_eq!(
            StreamPlatform::detect("https://www.youtube.com/watch?v=abc"),
            StreamPlatform::Youtube
        );
        assert_eq!(
            StreamPlatform::detect("https://youtu.be/abc"),
            StreamPlatform::Youtube
        );
    }

    #[test]
    fn detects_twitch() {
        assert_eq!(
            StreamPlatform::detect("https://twitch.tv/somechannel"),
            StreamPlatform::Twitch
        );
    }

    #[test]
    fn detects_facebook_and_instagram() {
        assert_eq!(
            StreamPlatform::detect("https://www.facebook.com/live/video"),
            StreamPlatform::Facebook
        );
        assert_eq!(
            StreamPlatform::detect("https://instagram.com/reel/xyz"),
            StreamPlatform::Instagram
        );
    }

    #[test]
    fn detects_hls_by_extension() {
        assert_eq!(
            StreamPlatform::detect("https://cdn.example.com/live/index.m3u8"),
            StreamPlatform::Hls
        );
    }

    #[test]
    fn detects_rtmp_scheme() {
        assert_eq!(
            StreamPlatform::detect("rtmp://ingest.example.com/live"),
            StreamPlatform::Rtmp
        );
    }

    #[test]
    fn unknown_is_generic() {
        assert_eq!(
            StreamPlatform::detect("https://example.com/player"),
            StreamPlatform::Generic
        );
        assert_eq!(StreamPlatform::detect("not a url"), StreamPlatform::Generic);
    }

    #[test]
    fn host_match_beats_hls_path_check() {
        // A YouTube URL containing "hls" in the path is still YouTube.
        assert_eq!(
            StreamPlatform::detect("https://youtube.com/hls/stream"),
            StreamPlatform::Youtube
        );
    }

    #[test]
    fn as_str_round_trip() {
        for platform in StreamPlatform::all() {
            assert_eq!(
                StreamPlatform::from_str_or_generic(platform.as_str()),
                platform
            );
        }
    }

    #[test]
    fn unknown_string_parses_as_generic() {
        assert_eq!(
            StreamPlatform::from_str_or_generic("vimeo"),
            StreamPlatform::Generic
        );
    }
}
