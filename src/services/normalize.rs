//! Normalization boundary: raw catalog payloads become `VideoSummary` values
//! here, and nowhere else. Missing or malformed source fields substitute the
//! documented fallbacks instead of failing the whole page.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::models::{
    youtube::{Snippet, VideoResource},
    VideoSummary,
};

pub const FALLBACK_TITLE: &str = "Untitled";
pub const FALLBACK_CHANNEL: &str = "Unknown Channel";
pub const FALLBACK_THUMBNAIL: &str = "https://via.placeholder.com/480x360.png?text=No+Thumbnail";

/// Abbreviates a numeric count string for display.
///
/// Below 1,000 the input passes through verbatim; 1,000 and up abbreviates to
/// thousands ("4.3K"), 1,000,000 and up to millions ("1.2M"), each with one
/// decimal. Unparseable input yields "N/A".
pub fn format_view_count(count: &str) -> String {
    let num: i64 = match count.trim().parse() {
        Ok(n) => n,
        Err(_) => return "N/A".to_string(),
    };

    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern is valid")
    })
}

/// Formats an ISO 8601 duration ("PT1H2M3S") as a clock string.
///
/// Durations with hours render as "H:MM:SS", otherwise "M:SS". Input that
/// does not match the `PT(\d+H)?(\d+M)?(\d+S)?` shape formats as an empty
/// string.
pub fn format_duration(duration: &str) -> String {
    let caps = match duration_pattern().captures(duration) {
        Some(c) => c,
        None => return String::new(),
    };

    let hours: u64 = caps.get(1).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let minutes: u64 = caps.get(2).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let seconds: u64 = caps.get(3).map_or(0, |m| m.as_str().parse().unwrap_or(0));

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Formats an RFC 3339 publish timestamp as a display date.
///
/// Unparseable timestamps pass through verbatim rather than erroring; the
/// field is display-only.
pub fn format_published_date(published_at: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(published_at) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => published_at.to_string(),
    }
}

/// Best available thumbnail URL: high, then medium, then default, then a
/// placeholder image.
pub fn thumbnail_url(snippet: Option<&Snippet>) -> String {
    snippet
        .and_then(|s| s.thumbnails.as_ref())
        .and_then(|t| {
            t.high
                .as_ref()
                .or(t.medium.as_ref())
                .or(t.fallback.as_ref())
        })
        .map(|t| t.url.clone())
        .unwrap_or_else(|| FALLBACK_THUMBNAIL.to_string())
}

/// Builds a display summary from a fully-hydrated video resource (snippet +
/// statistics + contentDetails), as returned by the most-popular chart.
pub fn summary_from_video(video: &VideoResource) -> VideoSummary {
    let snippet = video.snippet.as_ref();
    let stats = video.statistics.as_ref();

    VideoSummary {
        id: video.id.clone(),
        title: snippet
            .and_then(|s| s.title.clone())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        description: snippet
            .and_then(|s| s.description.clone())
            .unwrap_or_default(),
        thumbnail_url: thumbnail_url(snippet),
        channel_title: snippet
            .and_then(|s| s.channel_title.clone())
            .unwrap_or_else(|| FALLBACK_CHANNEL.to_string()),
        published_at: snippet
            .and_then(|s| s.published_at.as_deref())
            .map(format_published_date)
            .unwrap_or_default(),
        view_count: format_view_count(
            stats
                .and_then(|s| s.view_count.as_deref())
                .unwrap_or("0"),
        ),
        like_count: format_view_count(
            stats
                .and_then(|s| s.like_count.as_deref())
                .unwrap_or("0"),
        ),
        duration: video
            .content_details
            .as_ref()
            .and_then(|d| d.duration.as_deref())
            .map(format_duration)
            .unwrap_or_default(),
        category_id: snippet
            .and_then(|s| s.category_id.clone())
            .unwrap_or_default(),
        watched_at: None,
    }
}

/// Builds a display summary from a search hit joined with its (optional)
/// batched statistics/contentDetails lookup.
pub fn summary_from_search_hit(
    video_id: &str,
    snippet: Option<&Snippet>,
    details: Option<&VideoResource>,
) -> VideoSummary {
    let stats = details.and_then(|d| d.statistics.as_ref());

    VideoSummary {
        id: video_id.to_string(),
        title: snippet
            .and_then(|s| s.title.clone())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        description: snippet
            .and_then(|s| s.description.clone())
            .unwrap_or_default(),
        thumbnail_url: thumbnail_url(snippet),
        channel_title: snippet
            .and_then(|s| s.channel_title.clone())
            .unwrap_or_else(|| FALLBACK_CHANNEL.to_string()),
        published_at: snippet
            .and_then(|s| s.published_at.as_deref())
            .map(format_published_date)
            .unwrap_or_default(),
        view_count: format_view_count(
            stats
                .and_then(|s| s.view_count.as_deref())
                .unwrap_or("0"),
        ),
        like_count: format_view_count(
            stats
                .and_then(|s| s.like_count.as_deref())
                .unwrap_or("0"),
        ),
        duration: details
            .and_then(|d| d.content_details.as_ref())
            .and_then(|d| d.duration.as_deref())
            .map(format_duration)
            .unwrap_or_default(),
        category_id: snippet
            .and_then(|s| s.category_id.clone())
            .unwrap_or_default(),
        watched_at: None,
    }
}
