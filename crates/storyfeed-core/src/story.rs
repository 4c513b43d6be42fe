//! Story records and identifiers.

use serde::{Deserialize, Serialize};

/// Unique story identifier within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub u64);

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StoryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single list entry: title, url, author, comment/point counts.
///
/// Identity is [`StoryId`]; no two stories in a collection share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identity within a collection
    pub id: StoryId,
    /// Link target
    pub url: String,
    /// Display title, the field searches run against
    pub title: String,
    /// Author line
    pub author: String,
    /// Comment count
    pub num_comments: u64,
    /// Points score
    pub points: u64,
}

impl Story {
    /// Create a story with empty url/author and zeroed counters.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: StoryId(id),
            url: String::new(),
            title: title.into(),
            author: String::new(),
            num_comments: 0,
            points: 0,
        }
    }

    /// With a link target.
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// With an author line.
    #[inline]
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// With comment and point counts.
    #[inline]
    #[must_use]
    pub fn with_counts(mut self, num_comments: u64, points: u64) -> Self {
        self.num_comments = num_comments;
        self.points = points;
        self
    }

    /// The bundled two-entry sample collection, used as the demo seed.
    #[must_use]
    pub fn samples() -> Vec<Story> {
        vec![
            Story::new(0, "React")
                .with_url("https://reactjs.org/")
                .with_author("Jordan Walke")
                .with_counts(3, 4),
            Story::new(1, "Redux")
                .with_url("https://redux.js.org/")
                .with_author("Dan Abramov, Andrew Clark")
                .with_counts(2, 5),
        ]
    }
}

/// Whether every story in `stories` carries a distinct id.
pub fn has_unique_ids(stories: &[Story]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(stories.len());
    stories.iter().all(|story| seen.insert(story.id))
}
