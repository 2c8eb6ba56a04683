//! Thin facade over the command layer.
//!
//! The interactive loop talks only to [`GestadApi`]; each method dispatches
//! to one command module and returns its [`CmdResult`]. No business logic
//! lives here.

use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;

pub use crate::commands::stats::Stats;
pub use crate::commands::{CmdMessage, CmdResult, FieldEdit, MessageLevel, RecordDraft, RecordPatch};
pub use crate::store::records::SaveOutcome;

pub struct GestadApi<B: StorageBackend> {
    store: RecordStore<B>,
}

impl<B: StorageBackend> GestadApi<B> {
    /// Load the persisted records through the given backend.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            store: RecordStore::open(backend)?,
        })
    }

    /// Create a record from a draft and persist it.
    pub fn add(&mut self, draft: RecordDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    /// Every record, insertion order preserved.
    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Case-insensitive substring search over name, badge and department.
    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    /// Look up a single record by id.
    pub fn find_by_id(&self, id: u32) -> Option<Record> {
        self.store.find(id).cloned()
    }

    /// Apply a patch to an existing record and persist the sequence.
    pub fn update(&mut self, id: u32, patch: RecordPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    /// Remove a record by id and persist the remaining sequence.
    pub fn delete(&mut self, id: u32) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    /// Salary and headcount aggregates over the whole store.
    pub fn statistics(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }
}
