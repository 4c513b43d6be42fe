//! Error types for storyfeed-core.
//!
//! Two layers: `FetchError` for repository outcomes, `SessionError` for the
//! session surface. Storage write failures never appear here; they are
//! swallowed inside the persisted cell.

/// Repository fetch failures.
///
/// A fetch produces exactly one terminal outcome; these are the failing
/// ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The source did not produce a collection.
    #[error("story source unavailable")]
    Unavailable,

    /// The fetch was cut short by the source.
    #[error("fetch interrupted: {0}")]
    Interrupted(String),
}

/// Session surface errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// `load` was called after a load had already been started.
    #[error("load already started; a session loads once")]
    LoadAlreadyStarted,

    /// The load failed; the collection keeps its last known-good value.
    #[error("load failed: {0}")]
    LoadFailed(#[from] FetchError),
}

impl SessionError {
    /// Whether this error is a misuse of the session rather than a runtime
    /// failure.
    #[inline]
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, Self::LoadAlreadyStarted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display() {
        assert!(FetchError::Unavailable.to_string().contains("unavailable"));
        assert!(FetchError::Interrupted("reset".to_string())
            .to_string()
            .contains("reset"));
    }

    #[test]
    fn session_error_classification() {
        assert!(SessionError::LoadAlreadyStarted.is_caller_bug());
        assert!(!SessionError::LoadFailed(FetchError::Unavailable).is_caller_bug());
    }
}
