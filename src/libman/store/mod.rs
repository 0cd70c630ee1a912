//! # Storage Layer
//!
//! The whole library lives in one [`Document`]. A [`DataStore`] knows how to
//! bootstrap, read and overwrite that document, nothing more: it never looks
//! inside the collections and enforces no business rules.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON file
//!   - Parent directory and an empty document are created on open
//!   - Saves go to a temp file that is renamed over the target
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Counts saves and can be switched to fail them
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! └── library.json   # {"books": [...], "members": [...], "loans": [...]}
//! ```

use crate::error::StorageError;
use crate::model::Document;

pub mod fs;
pub mod memory;

pub type StoreResult<T> = std::result::Result<T, StorageError>;

/// Abstract interface for whole-document persistence.
pub trait DataStore {
    /// Create whatever is needed so that `load` succeeds on a fresh install.
    fn ensure_initialized(&mut self) -> StoreResult<()>;

    /// Read the full document.
    fn load(&self) -> StoreResult<Document>;

    /// Replace the persisted document with `doc`.
    fn save(&mut self, doc: &Document) -> StoreResult<()>;
}
