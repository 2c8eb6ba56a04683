use super::StorageBackend;
use crate::error::Result;
use crate::model::Record;
use std::cell::RefCell;

/// In-memory backend for tests and development. Nothing touches the
/// filesystem; the last persisted sequence stays observable.
#[derive(Default)]
pub struct InMemoryStore {
    persisted: RefCell<Vec<Record>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the backend, as if the sequence had been persisted before.
    pub fn seeded(records: Vec<Record>) -> Self {
        Self {
            persisted: RefCell::new(records),
        }
    }

    /// The sequence exactly as last persisted.
    pub fn persisted(&self) -> Vec<Record> {
        self.persisted.borrow().clone()
    }
}

impl StorageBackend for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.persisted.borrow().clone())
    }

    fn persist(&self, records: &[Record]) -> Result<()> {
        *self.persisted.borrow_mut() = records.to_vec();
        Ok(())
    }
}
