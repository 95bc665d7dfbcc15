/// Catalog data provider abstraction
///
/// The HTTP routes and the client-session wrapper talk to the catalog through
/// this trait, so the remote API can be swapped (or stubbed in tests) without
/// touching the call sites.
use crate::{error::AppResult, models::VideoSummary};

pub mod youtube;

#[cfg(test)]
use mockall::automock;

/// Read-only video catalog operations
///
/// Every operation resolves to a normalized `VideoSummary` list or an
/// `AppError` carrying a human-readable message. None mutate remote state.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Aggregated most-popular feed across the region's leading categories,
    /// ranked by hotness. Requires no user credential.
    async fn fetch_home_feed(&self) -> AppResult<Vec<VideoSummary>>;

    /// Relevance-ordered catalog search. Blank queries are rejected with
    /// `InvalidInput`; callers should fall back to the home feed instead.
    async fn search(&self, query: &str) -> AppResult<Vec<VideoSummary>>;

    /// The signed-in user's watch history, most recently watched first.
    /// Fails with `ScopeNotGranted` when no access token is supplied.
    ///
    /// The token lifetime is named because mockall cannot mock an elided
    /// reference inside a generic argument type.
    async fn fetch_watch_history<'a>(
        &self,
        access_token: Option<&'a str>,
    ) -> AppResult<Vec<VideoSummary>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
