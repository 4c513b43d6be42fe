//! State-transition actions for the story collection.
//!
//! The variant set is closed and every consumer matches exhaustively, so an
//! out-of-contract action cannot exist at runtime.

use crate::story::Story;

/// An immutable instruction describing one transition of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// Replace the whole collection with the payload.
    SetStories(Vec<Story>),
    /// Drop the single story carrying the payload's id, if present.
    RemoveStory(Story),
}
