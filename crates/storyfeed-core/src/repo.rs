//! Story sources.
//!
//! [`StoryRepository`] abstracts where the collection comes from. The
//! bundled implementation simulates a remote call: it holds a seed
//! collection and resolves after a fixed latency, or fails when configured
//! to.

use crate::error::FetchError;
use crate::story::Story;
use async_trait::async_trait;
use std::time::Duration;

/// Source of the full story collection.
///
/// One call produces exactly one terminal outcome, the whole collection or
/// an error. No partial results, no built-in retry, no cancellation.
#[async_trait]
pub trait StoryRepository: Send + Sync + std::fmt::Debug {
    /// Fetch the current collection.
    ///
    /// # Errors
    /// `FetchError` when the source could not produce the collection.
    async fn fetch_stories(&self) -> Result<Vec<Story>, FetchError>;
}

/// Simulated remote source with a fixed latency.
#[derive(Debug, Clone)]
pub struct SimulatedRepository {
    seed: Vec<Story>,
    delay: Duration,
    fail: bool,
}

impl SimulatedRepository {
    /// Latency used when none is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    /// Source resolving with `seed` after the default latency.
    #[must_use]
    pub fn new(seed: Vec<Story>) -> Self {
        Self {
            seed,
            delay: Self::DEFAULT_DELAY,
            fail: false,
        }
    }

    /// With a specific latency.
    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make every fetch fail after the latency elapses.
    #[inline]
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// The collection a successful fetch resolves with.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &[Story] {
        &self.seed
    }
}

#[async_trait]
impl StoryRepository for SimulatedRepository {
    async fn fetch_stories(&self) -> Result<Vec<Story>, FetchError> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(FetchError::Unavailable);
        }
        Ok(self.seed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_resolves_with_the_seed() {
        let repo = SimulatedRepository::new(Story::samples()).with_delay(Duration::ZERO);

        let stories = repo.fetch_stories().await.unwrap();
        assert_eq!(stories, repo.seed());
    }

    #[tokio::test]
    async fn failing_fetch_rejects() {
        let repo = SimulatedRepository::new(Story::samples())
            .with_delay(Duration::ZERO)
            .failing();

        let result = repo.fetch_stories().await;
        assert_eq!(result, Err(FetchError::Unavailable));
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_out_the_configured_latency() {
        let repo = SimulatedRepository::new(Story::samples()).with_delay(Duration::from_secs(2));

        let before = tokio::time::Instant::now();
        repo.fetch_stories().await.unwrap();

        assert!(before.elapsed() >= Duration::from_secs(2));
    }
}
