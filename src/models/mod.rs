use serde::{Deserialize, Serialize};

pub mod youtube;

/// Normalized, display-ready representation of a catalog video returned to
/// the client.
///
/// Constructed fresh per API response at the normalization boundary
/// (`services::normalize`); never persisted. Numeric fields are already
/// abbreviated for display and `duration` is already clock-formatted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    /// Canonical catalog video id (never a playlist-item id)
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    /// Display-formatted publish date
    pub published_at: String,
    /// Abbreviated view count, e.g. "1.2M"
    pub view_count: String,
    /// Abbreviated like count
    pub like_count: String,
    /// Clock-formatted duration: "H:MM:SS" or "M:SS"
    pub duration: String,
    pub category_id: String,
    /// Raw watch-event timestamp; present only in watch-history results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<String>,
}
