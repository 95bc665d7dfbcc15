use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};

use crate::{error::AppResult, models::VideoSummary, state::AppState};

/// Handler for the signed-in user's watch history
///
/// The bearer token is minted by the external session provider and forwarded
/// by the client; the service never stores or refreshes it. A missing token
/// surfaces as 401 so the client can prompt for re-authentication.
pub async fn watch_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<Vec<VideoSummary>>> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    let history = state.provider.fetch_watch_history(token).await?;
    Ok(Json(history))
}
