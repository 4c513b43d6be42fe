//! Error types for the store crate.

use std::path::PathBuf;

/// Storage medium failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store io failure at {path}: {source}")]
    Io {
        /// Backing file path
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The backing file holds something other than a JSON string map.
    #[error("store data at {path} is not a string map: {source}")]
    Corrupt {
        /// Backing file path
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The medium rejected the write.
    #[error("store rejected write: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::Rejected("quota".to_string());
        assert!(err.to_string().contains("rejected"));
    }
}
