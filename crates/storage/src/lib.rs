//! Storage abstraction and implementations for the study tracker.
//!
//! Data lives in an opaque key-value store under three keys (`todos`,
//! `reminders`, `progress`). A JSON file backend and an in-memory backend
//! are provided.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory;
pub mod snapshot;

pub use trait_::{Storage, StorageError, Result};
pub use json_storage::JsonStorage;
pub use memory::MemoryStorage;
pub use snapshot::{load_data, save_data, PROGRESS_KEY, REMINDERS_KEY, TODOS_KEY};
