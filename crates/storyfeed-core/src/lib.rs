//! storyfeed-core - story-list state machine
//!
//! The core of a stories browser:
//! - Pure reducer owning the canonical collection
//! - Asynchronous repository populating it (simulated latency, can fail)
//! - Case-insensitive title projection derived on every read
//! - Session glue sequencing load -> dispatch and user events
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storyfeed_core::prelude::*;
//! use storyfeed_store::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = Arc::new(SimulatedRepository::new(Story::samples()));
//! let mut session = StorySession::new(
//!     SessionConfig::new(),
//!     repository,
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! session.load().await?;
//! session.set_search_term("re");
//! for story in session.visible_stories() {
//!     println!("{}", story.title);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod action;
pub mod config;
pub mod error;
pub mod filter;
pub mod reducer;
pub mod repo;
pub mod session;
pub mod story;

// Re-exports for convenience
pub use action::StoriesAction;
pub use config::SessionConfig;
pub use error::{FetchError, SessionError};
pub use filter::filter_stories;
pub use reducer::reduce;
pub use repo::{SimulatedRepository, StoryRepository};
pub use session::{LoadState, StorySession};
pub use story::{Story, StoryId};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with storyfeed-core
    pub use crate::{
        filter_stories, reduce, LoadState, SessionConfig, SimulatedRepository, StoriesAction,
        Story, StoryId, StoryRepository, StorySession,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
