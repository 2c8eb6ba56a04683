//! # Storage Layer
//!
//! The [`StorageBackend`] trait carries the raw persistence contract: the
//! backing store is read and written as a whole, one ordered sequence in,
//! one ordered sequence out. There is no partial update and no append log;
//! every mutation rewrites the complete sequence.
//!
//! Splitting backend from store keeps the concerns apart:
//! - backends handle the *how* of storage (JSON file vs memory),
//! - [`records::RecordStore`] handles the *what* (the owned in-memory
//!   sequence, id assignment, the save discipline).
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production file-based storage. One JSON array
//!   with French object keys, 4-space indent and non-ASCII written
//!   literally, byte-compatible with the historical data files.
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No filesystem,
//!   last persisted sequence observable for assertions.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;
pub mod records;

/// Abstract interface for record persistence.
pub trait StorageBackend {
    /// Load the full persisted sequence. A missing backing file is an empty
    /// store, not an error; an unparseable one is fatal.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the persisted sequence with `records`.
    fn persist(&self, records: &[Record]) -> Result<()>;
}
