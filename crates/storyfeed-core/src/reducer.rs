//! Pure transition function over the story collection.

use crate::action::StoriesAction;
use crate::story::{has_unique_ids, Story};

/// Apply `action` to `state` and return the next collection.
///
/// Referentially transparent: no side effects, equal inputs yield equal
/// results. `SetStories` discards the prior state wholesale; `RemoveStory`
/// drops the matching id and preserves the order of everything else, and is
/// a no-op when the id is absent.
#[must_use]
pub fn reduce(state: Vec<Story>, action: StoriesAction) -> Vec<Story> {
    match action {
        StoriesAction::SetStories(payload) => {
            debug_assert!(
                has_unique_ids(&payload),
                "payload contains duplicate story ids"
            );
            payload
        }
        StoriesAction::RemoveStory(story) => state
            .into_iter()
            .filter(|candidate| candidate.id != story.id)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_wholesale() {
        let state = vec![Story::new(0, "React")];
        let payload = vec![Story::new(1, "Redux"), Story::new(2, "Svelte")];

        let next = reduce(state, StoriesAction::SetStories(payload.clone()));
        assert_eq!(next, payload);
    }

    #[test]
    fn remove_drops_only_the_matching_id() {
        let state = Story::samples();
        let target = state[0].clone();

        let next = reduce(state, StoriesAction::RemoveStory(target.clone()));
        assert_eq!(next.len(), 1);
        assert!(next.iter().all(|s| s.id != target.id));
    }

    #[test]
    fn remove_of_absent_id_is_noop() {
        let state = Story::samples();

        let next = reduce(
            state.clone(),
            StoriesAction::RemoveStory(Story::new(99, "Vue")),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn remove_preserves_order() {
        let state = vec![
            Story::new(0, "a"),
            Story::new(1, "b"),
            Story::new(2, "c"),
            Story::new(3, "d"),
        ];

        let next = reduce(state, StoriesAction::RemoveStory(Story::new(1, "b")));
        let ids: Vec<u64> = next.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![0, 2, 3]);
    }
}
