//! Session configuration.

use crate::story::Story;
use serde::{Deserialize, Serialize};

/// Configuration for a [`StorySession`](crate::session::StorySession).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Collection dispatched on `reset`.
    pub seed: Vec<Story>,
    /// Durable-store key the search term persists under.
    pub search_key: String,
    /// Search term adopted when the store holds none.
    pub fallback_term: String,
}

impl SessionConfig {
    /// Default configuration over the sample collection.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a specific reset seed.
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: Vec<Story>) -> Self {
        self.seed = seed;
        self
    }

    /// With a specific persistence key.
    #[inline]
    #[must_use]
    pub fn with_search_key(mut self, key: impl Into<String>) -> Self {
        self.search_key = key.into();
        self
    }

    /// With a specific fallback term.
    #[inline]
    #[must_use]
    pub fn with_fallback_term(mut self, term: impl Into<String>) -> Self {
        self.fallback_term = term.into();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: Story::samples(),
            search_key: "search".to_string(),
            fallback_term: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SessionConfig::new();
        assert_eq!(config.search_key, "search");
        assert_eq!(config.seed, Story::samples());
        assert!(config.fallback_term.is_empty());
    }

    #[test]
    fn builder_overrides() {
        let config = SessionConfig::new()
            .with_seed(vec![Story::new(9, "Vue")])
            .with_search_key("query")
            .with_fallback_term("React");

        assert_eq!(config.seed.len(), 1);
        assert_eq!(config.search_key, "query");
        assert_eq!(config.fallback_term, "React");
    }
}
