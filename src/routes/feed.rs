use axum::{extract::State, Json};

use crate::{error::AppResult, models::VideoSummary, state::AppState};

/// Handler for the aggregated home feed
pub async fn home_feed(State(state): State<AppState>) -> AppResult<Json<Vec<VideoSummary>>> {
    let feed = state.provider.fetch_home_feed().await?;
    Ok(Json(feed))
}
