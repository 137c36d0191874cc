//! # Storage Layer
//!
//! This module defines the storage abstraction for snipz. The [`SnippetStore`] trait
//! allows the rest of the crate to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per snippet: `<root>/<name>.txt`
//!   - The directory listing is the index; nothing else is stored
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Keeps insertion order so listings are stable in tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! snippets/
//! ├── todo.txt
//! ├── shell one-liners.txt
//! └── .snip-{uuid}.tmp    # transient, only during a save
//! ```
//!
//! There is no metadata file and no cache. Every operation round-trips through
//! the filesystem, so files dropped into the root by hand show up immediately.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface for snippet storage.
///
/// Names passed in are expected to have been validated by the caller
/// (see [`crate::model::validate_name`]).
pub trait SnippetStore {
    /// Directory the snippets live in
    fn root(&self) -> &Path;

    /// Point the store at a different root
    fn set_root(&mut self, root: PathBuf);

    /// Create the root if it does not exist yet
    fn ensure_root(&self) -> Result<()>;

    /// Names of all snippets, in listing order
    fn list(&self) -> Result<Vec<String>>;

    /// Create an empty snippet. Fails with `AlreadyExists` on a duplicate.
    fn create(&mut self, name: &str) -> Result<()>;

    /// Full text of a snippet. Fails with `NotFound` if it is missing.
    fn read(&self, name: &str) -> Result<String>;

    /// Raw bytes of a snippet, as stored
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>>;

    /// Overwrite a snippet's content, creating it if missing
    fn save(&mut self, name: &str, content: &str) -> Result<()>;

    /// Remove a snippet permanently
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Path of the file backing a snippet (virtual for non-file stores)
    fn snippet_path(&self, name: &str) -> PathBuf;
}
