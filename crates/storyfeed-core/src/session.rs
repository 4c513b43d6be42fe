//! Session orchestration: load sequencing and user-event dispatch.
//!
//! [`StorySession`] owns the canonical collection and funnels every mutation
//! through sequential action dispatch against the pure reducer. The load
//! path is a four-state machine:
//!
//! ```text
//! Idle --load--> Loading --success--> Loaded
//!                   \------failure--> Failed
//! ```
//!
//! A session fetches at most once; terminal states never retry on their own.
//! User events (remove, reset, search edits) are applied immediately against
//! the current collection, whatever the load state: the internal lock is
//! never held across the fetch await, so nothing queues behind an
//! outstanding fetch.

use crate::action::StoriesAction;
use crate::config::SessionConfig;
use crate::error::{FetchError, SessionError};
use crate::filter::filter_stories;
use crate::reducer::reduce;
use crate::repo::StoryRepository;
use crate::story::Story;
use parking_lot::Mutex;
use std::sync::Arc;
use storyfeed_store::{PersistedCell, StoreHandle};

/// Progress of the one fetch a session performs.
///
/// A single tagged state makes the invalid flag combination (loading and
/// failed at once) unrepresentable; [`LoadState::is_loading`] and
/// [`LoadState::is_error`] are the derived views consumers read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch started yet.
    Idle,
    /// Fetch outstanding.
    Loading,
    /// Fetch resolved; the collection holds its payload.
    Loaded,
    /// Fetch failed; the collection keeps its last known-good value.
    Failed(FetchError),
}

impl LoadState {
    /// Whether a fetch is outstanding.
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the fetch ended in failure.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Mutable session state, guarded as one unit so every observer sees a
/// consistent (collection, load state, term) snapshot.
#[derive(Debug)]
struct SessionState {
    stories: Vec<Story>,
    load_state: LoadState,
    search_term: PersistedCell,
}

impl SessionState {
    fn dispatch(&mut self, action: StoriesAction) {
        let state = std::mem::take(&mut self.stories);
        self.stories = reduce(state, action);
    }
}

/// Owns the story collection and sequences all transitions against it.
#[derive(Debug)]
pub struct StorySession {
    config: SessionConfig,
    repository: Arc<dyn StoryRepository>,
    state: Mutex<SessionState>,
}

impl StorySession {
    /// Create a session over `repository`, persisting the search term in
    /// `store` under the configured key.
    #[must_use]
    pub fn new(
        config: SessionConfig,
        repository: Arc<dyn StoryRepository>,
        store: StoreHandle,
    ) -> Self {
        let search_term = PersistedCell::new(
            store,
            config.search_key.clone(),
            config.fallback_term.clone(),
        );
        Self {
            config,
            repository,
            state: Mutex::new(SessionState {
                stories: Vec::new(),
                load_state: LoadState::Idle,
                search_term,
            }),
        }
    }

    /// Run the session's one fetch and populate the collection.
    ///
    /// Legal only from `Idle`. On success the payload replaces the
    /// collection; on failure the collection is left untouched and the
    /// session stays in `Failed`.
    ///
    /// # Errors
    /// - `SessionError::LoadAlreadyStarted` outside `Idle`
    /// - `SessionError::LoadFailed` when the repository fails
    pub async fn load(&self) -> Result<(), SessionError> {
        {
            let mut state = self.state.lock();
            if state.load_state != LoadState::Idle {
                return Err(SessionError::LoadAlreadyStarted);
            }
            state.load_state = LoadState::Loading;
        }
        tracing::info!("story load started");

        let outcome = self.repository.fetch_stories().await;

        let mut state = self.state.lock();
        match outcome {
            Ok(payload) => {
                tracing::info!(count = payload.len(), "story load resolved");
                state.dispatch(StoriesAction::SetStories(payload));
                state.load_state = LoadState::Loaded;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "story load failed");
                state.load_state = LoadState::Failed(err.clone());
                Err(SessionError::LoadFailed(err))
            }
        }
    }

    /// Drop `story` from the collection, immediately, whatever the load
    /// state. Unknown ids are a no-op.
    pub fn remove_story(&self, story: &Story) {
        tracing::debug!(id = %story.id, "removing story");
        self.state
            .lock()
            .dispatch(StoriesAction::RemoveStory(story.clone()));
    }

    /// Restore the configured seed collection, immediately, whatever the
    /// load state.
    pub fn reset(&self) {
        tracing::debug!("restoring seed collection");
        self.state
            .lock()
            .dispatch(StoriesAction::SetStories(self.config.seed.clone()));
    }

    /// Replace the search term, writing it through the persisted cell.
    pub fn set_search_term(&self, term: impl Into<String>) {
        self.state.lock().search_term.set(term);
    }

    /// Current search term.
    #[inline]
    #[must_use]
    pub fn search_term(&self) -> String {
        self.state.lock().search_term.get().to_string()
    }

    /// Snapshot of the canonical collection.
    #[inline]
    #[must_use]
    pub fn stories(&self) -> Vec<Story> {
        self.state.lock().stories.clone()
    }

    /// Collection as filtered by the current search term; recomputed on
    /// every call.
    #[must_use]
    pub fn visible_stories(&self) -> Vec<Story> {
        let state = self.state.lock();
        filter_stories(&state.stories, state.search_term.get())
    }

    /// Load-machine state.
    #[inline]
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.state.lock().load_state.clone()
    }

    /// Whether a fetch is outstanding.
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state().is_loading()
    }

    /// Whether the fetch ended in failure.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.load_state().is_error()
    }

    /// Session configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::SimulatedRepository;
    use std::time::Duration;
    use storyfeed_store::MemoryStore;

    fn quick_session() -> StorySession {
        let repository = SimulatedRepository::new(Story::samples()).with_delay(Duration::ZERO);
        StorySession::new(
            SessionConfig::new(),
            Arc::new(repository),
            Arc::new(MemoryStore::new()),
        )
    }

    #[test]
    fn fresh_session_is_idle_and_empty() {
        let session = quick_session();

        assert_eq!(session.load_state(), LoadState::Idle);
        assert!(!session.is_loading());
        assert!(!session.is_error());
        assert!(session.stories().is_empty());
        assert_eq!(session.config().search_key, "search");
    }

    #[tokio::test]
    async fn load_transitions_to_loaded() {
        let session = quick_session();

        session.load().await.unwrap();

        assert_eq!(session.load_state(), LoadState::Loaded);
        assert_eq!(session.stories(), Story::samples());
    }

    #[test]
    fn reset_applies_before_any_load() {
        let session = quick_session();

        session.reset();

        assert_eq!(session.stories(), Story::samples());
        assert_eq!(session.load_state(), LoadState::Idle);
    }

    #[test]
    fn visible_stories_follow_the_search_term() {
        let session = quick_session();
        session.reset();

        session.set_search_term("redux");
        let visible = session.visible_stories();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Redux");
    }
}
