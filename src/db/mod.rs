//! Persistence backends for the task collection.
//!
//! The task store only needs a single-slot blob store: read the serialised
//! collection, overwrite it, or remove it. [`BlobStore`] captures that
//! contract and the backends here implement it:
//!
//! - [`blobs::SqliteBlobStore`]: a key/value table in the application's SQLite
//!   database, used by the command-line tool.
//! - [`memory::MemoryBlobStore`]: an in-process slot for tests and dry runs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheettask::db::{blobs::SqliteBlobStore, BlobStore};
//!
//! let mut blobs = SqliteBlobStore::new()?;
//! blobs.set("[]")?;
//! assert_eq!(blobs.get()?.as_deref(), Some("[]"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;

pub mod blobs;
pub mod db;
pub mod memory;

/// Single-slot store for the serialised task collection.
///
/// A single `set` call is assumed to be atomic.
pub trait BlobStore {
    /// Returns the stored blob, or `None` if nothing has been written.
    fn get(&self) -> Result<Option<String>>;

    /// Overwrites the stored blob.
    fn set(&mut self, blob: &str) -> Result<()>;

    /// Removes the stored blob.
    fn clear(&mut self) -> Result<()>;
}
