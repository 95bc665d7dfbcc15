//! Client-session fetch supersession guard.
//!
//! The app can trigger a new fetch while one is still in flight (a second
//! search keystroke, a tab switch back to the feed). Without a guard the
//! later response can overwrite the newer one with no ordering guarantee.
//! `CatalogSession` stamps every fetch with a generation from an atomic
//! counter and discards any result whose generation is no longer current, so
//! a superseded fetch resolves to `Ok(None)` instead of stale data.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{error::AppResult, models::VideoSummary, services::providers::CatalogProvider};

/// Monotonic fetch-generation counter
#[derive(Debug, Default)]
pub struct Generation {
    counter: AtomicU64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, superseding all earlier ones
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the newest one started
    pub fn is_current(&self, generation: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == generation
    }
}

/// Per-screen catalog handle that drops superseded responses.
///
/// All three fetch kinds share one counter: any newer fetch supersedes any
/// older one, matching a single list view that shows exactly one result set.
pub struct CatalogSession {
    provider: Arc<dyn CatalogProvider>,
    generation: Generation,
}

impl CatalogSession {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            generation: Generation::new(),
        }
    }

    pub async fn fetch_home_feed(&self) -> AppResult<Option<Vec<VideoSummary>>> {
        let generation = self.generation.begin();
        let feed = self.provider.fetch_home_feed().await?;
        Ok(self.keep_if_current(generation, feed))
    }

    pub async fn search(&self, query: &str) -> AppResult<Option<Vec<VideoSummary>>> {
        let generation = self.generation.begin();
        let results = self.provider.search(query).await?;
        Ok(self.keep_if_current(generation, results))
    }

    pub async fn fetch_watch_history(
        &self,
        access_token: Option<&str>,
    ) -> AppResult<Option<Vec<VideoSummary>>> {
        let generation = self.generation.begin();
        let history = self.provider.fetch_watch_history(access_token).await?;
        Ok(self.keep_if_current(generation, history))
    }

    fn keep_if_current(
        &self,
        generation: u64,
        videos: Vec<VideoSummary>,
    ) -> Option<Vec<VideoSummary>> {
        if self.generation.is_current(generation) {
            Some(videos)
        } else {
            tracing::debug!(generation, "Discarding superseded fetch result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockCatalogProvider;
    use std::time::Duration;

    fn summary(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            thumbnail_url: String::new(),
            channel_title: String::new(),
            published_at: String::new(),
            view_count: "0".to_string(),
            like_count: "0".to_string(),
            duration: String::new(),
            category_id: String::new(),
            watched_at: None,
        }
    }

    #[test]
    fn test_generation_supersedes_older() {
        let generation = Generation::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_uncontended_fetch_is_kept() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_search()
            .returning(|query| Ok(vec![summary(query)]));

        let session = CatalogSession::new(Arc::new(mock));
        let result = tokio_test::block_on(session.search("cats")).unwrap();
        assert_eq!(result.unwrap()[0].id, "cats");
    }

    #[tokio::test]
    async fn test_error_still_propagates() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_watch_history()
            .returning(|_| Err(crate::error::AppError::Upstream("boom".to_string())));

        let session = CatalogSession::new(Arc::new(mock));
        assert!(session.fetch_watch_history(Some("tok")).await.is_err());
    }

    /// Stub provider whose search sleeps, so two calls can interleave.
    struct SlowProvider {
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl CatalogProvider for SlowProvider {
        async fn fetch_home_feed(&self) -> AppResult<Vec<VideoSummary>> {
            Ok(vec![summary("feed")])
        }

        async fn search(&self, query: &str) -> AppResult<Vec<VideoSummary>> {
            tokio::time::sleep(self.delay).await;
            Ok(vec![summary(query)])
        }

        async fn fetch_watch_history<'a>(
            &self,
            _access_token: Option<&'a str>,
        ) -> AppResult<Vec<VideoSummary>> {
            Ok(Vec::new())
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_search_is_discarded() {
        let session = Arc::new(CatalogSession::new(Arc::new(SlowProvider {
            delay: Duration::from_millis(100),
        })));

        // The first search is still sleeping when the second one begins, so
        // only the second may deliver a result.
        let slow_session = session.clone();
        let first = tokio::spawn(async move { slow_session.search("first").await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = session.search("second").await.unwrap();

        let first = first.await.unwrap().unwrap();
        assert!(first.is_none());
        assert_eq!(second.unwrap()[0].id, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_history_superseded_by_newer_feed_fetch() {
        struct SlowHistory;

        #[async_trait::async_trait]
        impl CatalogProvider for SlowHistory {
            async fn fetch_home_feed(&self) -> AppResult<Vec<VideoSummary>> {
                Ok(vec![summary("feed")])
            }

            async fn search(&self, _query: &str) -> AppResult<Vec<VideoSummary>> {
                Ok(Vec::new())
            }

            async fn fetch_watch_history<'a>(
                &self,
                _access_token: Option<&'a str>,
            ) -> AppResult<Vec<VideoSummary>> {
                tokio::time::sleep(Duration::from_millis(100)).await;
                Ok(vec![summary("watched")])
            }

            fn name(&self) -> &'static str {
                "slow-history"
            }
        }

        let session = Arc::new(CatalogSession::new(Arc::new(SlowHistory)));
        let slow_session = session.clone();
        let history =
            tokio::spawn(async move { slow_session.fetch_watch_history(Some("tok")).await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        let feed = session.fetch_home_feed().await.unwrap();

        assert!(history.await.unwrap().unwrap().is_none());
        assert_eq!(feed.unwrap()[0].id, "feed");
    }
}
