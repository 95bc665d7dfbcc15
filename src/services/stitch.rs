//! Watch-history stitcher.
//!
//! Playlist items and batched video details are differently-shaped
//! collections keyed by the canonical video id; this module reconciles them
//! into display summaries. Playlist entries without a resolvable video id are
//! dropped, and every missing nested field takes an explicit fallback.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{
    youtube::{PlaylistItemResource, VideoResource},
    VideoSummary,
};
use crate::services::normalize::{
    format_duration, format_published_date, format_view_count, thumbnail_url, FALLBACK_CHANNEL,
    FALLBACK_TITLE,
};

/// Joins playlist entries with their video details and orders the result
/// most-recently-watched first.
///
/// The playlist snippet's `publishedAt` is the watch-event timestamp; it is
/// kept verbatim in `watched_at` and used as the descending sort key.
/// Unparseable timestamps sort last.
pub fn stitch_history(
    items: &[PlaylistItemResource],
    details: &HashMap<String, VideoResource>,
) -> Vec<VideoSummary> {
    let mut summaries: Vec<VideoSummary> = items
        .iter()
        .filter_map(|item| {
            let video_id = item.video_id()?;
            Some(stitch_one(video_id, item, details.get(video_id)))
        })
        .collect();

    summaries.sort_by_key(|s| {
        std::cmp::Reverse(
            s.watched_at
                .as_deref()
                .and_then(|w| DateTime::parse_from_rfc3339(w).ok())
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        )
    });

    summaries
}

fn stitch_one(
    video_id: &str,
    item: &PlaylistItemResource,
    details: Option<&VideoResource>,
) -> VideoSummary {
    let snippet = item.snippet.as_ref();
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
        watched_at: snippet.and_then(|s| s.published_at.clone()),
    }
}
