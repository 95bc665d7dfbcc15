/// YouTube Data API v3 provider
///
/// Wraps the read endpoints the app consumes: videoCategories + mostPopular
/// charts for the home feed, search + batched video details for queries, and
/// channels/playlistItems for watch history. Key-authenticated endpoints use
/// the configured API key; history endpoints require the caller's bearer
/// token, obtained from the external session provider.
use std::collections::HashMap;

use chrono::Utc;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        youtube::{
            ApiErrorEnvelope, CategoryListResponse, ChannelListResponse,
            PlaylistItemListResponse, SearchListResponse, VideoListResponse, VideoResource,
        },
        VideoSummary,
    },
    services::{normalize, providers::CatalogProvider, ranking, stitch},
};

/// Categories queried for the home feed. The category listing's order is not
/// documented as stable, so which three get picked is API-ordering-dependent;
/// the behavior is preserved from the product as shipped.
const HOME_CATEGORY_COUNT: usize = 3;
const HOME_MAX_RESULTS: u32 = 10;
const SEARCH_MAX_RESULTS: u32 = 25;
const HISTORY_PAGE_SIZE: u32 = 50;
/// The videos endpoint accepts at most 50 comma-joined ids per request.
/// Search returns at most 25 hits and history pages are capped at 50 items,
/// so a single batched call always suffices.
const VIDEO_ID_BATCH_LIMIT: usize = 50;

const SCOPE_NOT_GRANTED: &str =
    "YouTube scope not granted. Please sign out and sign in again.";
const HISTORY_UNAVAILABLE: &str =
    "Could not access watch history. Please check your YouTube permissions.";

#[derive(Clone)]
pub struct YouTubeProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    region_code: String,
}

impl YouTubeProvider {
    pub fn new(api_key: String, api_url: String, region_code: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            region_code,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.youtube_api_key.clone(),
            config.youtube_api_url.clone(),
            config.region_code.clone(),
        )
    }

    /// Issues a GET and decodes the JSON body, surfacing the upstream error
    /// message verbatim on non-success statuses when one is available.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        bearer_token: Option<&str>,
    ) -> AppResult<T> {
        let mut request = self.http_client.get(&url);
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let envelope: ApiErrorEnvelope = response.json().await.unwrap_or_default();
            let message = envelope
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("YouTube API returned status {}", status));
            return Err(AppError::Upstream(message));
        }

        Ok(response.json().await?)
    }

    async fn fetch_category_chart(&self, category_id: String) -> AppResult<Vec<VideoResource>> {
        let url = format!(
            "{}/videos?part=snippet,statistics,contentDetails&chart=mostPopular&videoCategoryId={}&regionCode={}&maxResults={}&key={}",
            self.api_url, category_id, self.region_code, HOME_MAX_RESULTS, self.api_key
        );

        let response: VideoListResponse = self.get_json(url, None).await?;
        Ok(response.items)
    }

    /// Batched statistics/contentDetails lookup, keyed by video id. Ids are
    /// comma-joined into a single request; callers keep the list within the
    /// API's batch limit.
    async fn fetch_video_details(
        &self,
        video_ids: &[String],
    ) -> AppResult<HashMap<String, VideoResource>> {
        if video_ids.is_empty() {
            return Ok(HashMap::new());
        }
        debug_assert!(video_ids.len() <= VIDEO_ID_BATCH_LIMIT);

        let url = format!(
            "{}/videos?part=statistics,contentDetails&id={}&key={}",
            self.api_url,
            video_ids.join(","),
            self.api_key
        );

        let response: VideoListResponse = self.get_json(url, None).await?;
        Ok(response
            .items
            .into_iter()
            .map(|video| (video.id.clone(), video))
            .collect())
    }
}

#[async_trait::async_trait]
impl CatalogProvider for YouTubeProvider {
    async fn fetch_home_feed(&self) -> AppResult<Vec<VideoSummary>> {
        let url = format!(
            "{}/videoCategories?part=snippet&regionCode={}&key={}",
            self.api_url, self.region_code, self.api_key
        );
        let categories: CategoryListResponse = self.get_json(url, None).await?;

        // Fan out one most-popular request per category, collected in
        // category order so the later tie-break stays deterministic. Any
        // branch failure fails the whole feed.
        let mut tasks = Vec::new();
        for category in categories.items.into_iter().take(HOME_CATEGORY_COUNT) {
            let provider = self.clone();
            tasks.push(tokio::spawn(async move {
                provider.fetch_category_chart(category.id).await
            }));
        }

        let mut videos = Vec::new();
        for task in tasks {
            let batch = task
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??;
            videos.extend(batch);
        }

        let ranked = ranking::rank_by_hotness(videos, Utc::now());
        let feed: Vec<VideoSummary> = ranked.iter().map(normalize::summary_from_video).collect();

        tracing::info!(
            videos = feed.len(),
            provider = self.name(),
            "Home feed aggregated"
        );

        Ok(feed)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<VideoSummary>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!(
            "{}/search?part=snippet&q={}&type=video&maxResults={}&order=relevance&key={}",
            self.api_url,
            urlencoding::encode(query),
            SEARCH_MAX_RESULTS,
            self.api_key
        );
        let results: SearchListResponse = self.get_json(url, None).await?;

        let video_ids: Vec<String> = results
            .items
            .iter()
            .filter_map(|hit| hit.id.video_id.clone())
            .collect();
        let details = self.fetch_video_details(&video_ids).await?;

        let summaries: Vec<VideoSummary> = results
            .items
            .iter()
            .filter_map(|hit| {
                let video_id = hit.id.video_id.as_deref()?;
                Some(normalize::summary_from_search_hit(
                    video_id,
                    hit.snippet.as_ref(),
                    details.get(video_id),
                ))
            })
            .collect();

        tracing::info!(
            query = %query,
            results = summaries.len(),
            provider = self.name(),
            "Search completed"
        );

        Ok(summaries)
    }

    async fn fetch_watch_history<'a>(
        &self,
        access_token: Option<&'a str>,
    ) -> AppResult<Vec<VideoSummary>> {
        let token = match access_token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => return Err(AppError::ScopeNotGranted(SCOPE_NOT_GRANTED.to_string())),
        };

        // Resolve the account's watch-history playlist via the "my channel"
        // lookup; both calls need the user's bearer token.
        let url = format!("{}/channels?part=contentDetails&mine=true", self.api_url);
        let channels: ChannelListResponse = self.get_json(url, Some(token)).await?;

        let playlist_id = match channels.watch_history_playlist() {
            Some(id) => id.to_string(),
            None => return Err(AppError::ScopeNotGranted(HISTORY_UNAVAILABLE.to_string())),
        };

        let url = format!(
            "{}/playlistItems?part=snippet,contentDetails&playlistId={}&maxResults={}",
            self.api_url, playlist_id, HISTORY_PAGE_SIZE
        );
        let playlist: PlaylistItemListResponse = self.get_json(url, Some(token)).await?;

        if playlist.items.is_empty() {
            return Ok(Vec::new());
        }

        let video_ids: Vec<String> = playlist
            .items
            .iter()
            .filter_map(|item| item.video_id().map(str::to_string))
            .collect();

        // An empty history, or one with no resolvable video ids, is an empty
        // result, not an error.
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let details = self.fetch_video_details(&video_ids).await?;
        let history = stitch::stitch_history(&playlist.items, &details);

        tracing::info!(
            videos = history.len(),
            provider = self.name(),
            "Watch history fetched"
        );

        Ok(history)
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}
