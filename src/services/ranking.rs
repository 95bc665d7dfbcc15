//! Home-feed aggregation ranking.
//!
//! The per-category result sets are concatenated in category order and sorted
//! by a hotness score that favors recent, high-engagement videos over raw
//! view counts: `views + 2*likes - 100*age_in_hours`. The sort is stable, so
//! equal scores keep their concatenation order.

use chrono::{DateTime, Utc};

use crate::models::youtube::VideoResource;

const LIKE_WEIGHT: f64 = 2.0;
const AGE_PENALTY_PER_HOUR: f64 = 100.0;

/// Hotness score for one video at the given scoring instant.
///
/// Missing or unparseable statistics count as zero; an unparseable publish
/// time contributes no age penalty.
pub fn score(video: &VideoResource, now: DateTime<Utc>) -> f64 {
    let stats = video.statistics.as_ref();
    let views: f64 = stats
        .and_then(|s| s.view_count.as_deref())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0.0);
    let likes: f64 = stats
        .and_then(|s| s.like_count.as_deref())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0.0);

    let age_hours = video
        .snippet
        .as_ref()
        .and_then(|s| s.published_at.as_deref())
        .and_then(|p| DateTime::parse_from_rfc3339(p).ok())
        .map(|published| (now - published.with_timezone(&Utc)).num_seconds() as f64 / 3600.0)
        .unwrap_or(0.0);

    views + LIKE_WEIGHT * likes - AGE_PENALTY_PER_HOUR * age_hours
}

/// Sorts the concatenated category results descending by hotness.
///
/// Scores are computed once against a single `now` so an item's rank cannot
/// drift mid-sort. `Vec::sort_by` is stable; ties preserve input order.
pub fn rank_by_hotness(videos: Vec<VideoResource>, now: DateTime<Utc>) -> Vec<VideoResource> {
    let mut scored: Vec<(f64, VideoResource)> = videos
        .into_iter()
        .map(|video| (score(&video, now), video))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, video)| video).collect()
}
