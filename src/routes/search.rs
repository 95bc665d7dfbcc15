use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{error::AppResult, models::VideoSummary, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Handler for catalog search
///
/// A blank query serves the home feed instead; clearing the search box takes
/// the user back to trending.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<VideoSummary>>> {
    let videos = if params.q.trim().is_empty() {
        state.provider.fetch_home_feed().await?
    } else {
        state.provider.search(&params.q).await?
    };
    Ok(Json(videos))
}
