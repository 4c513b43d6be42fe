//! Derived view: title filtering.

use crate::story::Story;

/// Stories whose lower-cased title contains the lower-cased `term`.
///
/// The empty term matches everything. Relative order is preserved. Lowering
/// is simple and locale-independent; no collation. The result is computed
/// fresh on every call, never cached.
#[must_use]
pub fn filter_stories(stories: &[Story], term: &str) -> Vec<Story> {
    if term.is_empty() {
        return stories.to_vec();
    }
    let needle = term.to_lowercase();
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
