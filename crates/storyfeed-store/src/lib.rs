//! Durable key-value persistence for storyfeed
//!
//! Provides the narrow storage contract the rest of the workspace depends
//! on, plus the bundled media:
//! - [`KeyValueStore`]: `get`/`set` over string keys and values
//! - [`MemoryStore`]: in-process medium for tests and demos
//! - [`JsonFileStore`]: single-file JSON medium for real persistence
//! - [`PersistedCell`]: one named value with write-through persistence
//!
//! Stores are always passed in as handles ([`StoreHandle`]); nothing in this
//! crate reaches for an ambient singleton.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cell;
pub mod error;
pub mod file;
pub mod kv;

pub use cell::PersistedCell;
pub use error::StoreError;
pub use file::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore, StoreHandle};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
