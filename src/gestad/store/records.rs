use super::StorageBackend;
use crate::error::Result;
use crate::model::Record;

/// Outcome of a save, reported rather than raised.
///
/// A failed write leaves the in-memory sequence as mutated; memory and disk
/// stay divergent until the next successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// The owned, ordered record sequence plus its persistence discipline:
/// loaded once at startup, whole sequence rewritten on every mutation.
pub struct RecordStore<B: StorageBackend> {
    records: Vec<Record>,
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Load the persisted sequence. A missing backing file yields an empty
    /// store; an unreadable or unparseable one is fatal.
    pub fn open(backend: B) -> Result<Self> {
        let records = backend.load()?;
        Ok(Self { records, backend })
    }

    /// The full sequence, insertion order preserved.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Next id to assign: max existing id + 1, or 1 for an empty store,
    /// saturating at `u32::MAX`. Recomputed from the live sequence on every
    /// call; there is no cached counter that could drift from the backing
    /// file.
    pub fn next_id(&self) -> u32 {
        self.records
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    /// Linear scan; ids are unique so the first hit is the only one.
    pub fn find(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: u32) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub(crate) fn remove(&mut self, id: u32) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }

    /// Rewrite the backing store with the full current sequence. Failures
    /// are reported, never raised past this boundary.
    pub fn save(&self) -> SaveOutcome {
        match self.backend.persist(&self.records) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => SaveOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GestadError;
    use crate::store::memory::InMemoryStore;

    fn record(id: u32, name: &str) -> Record {
        Record {
            id,
            full_name: name.to_string(),
            badge_number: format!("M{:03}", id),
            department: "Informatique".to_string(),
            position: "Analyste".to_string(),
            hire_date: "01/01/2024".to_string(),
            salary: 2500.0,
            created_at: "01/01/2024 09:00:00".to_string(),
        }
    }

    /// Backend whose writes always fail, for divergence tests.
    struct FailingBackend;

    impl StorageBackend for FailingBackend {
        fn load(&self) -> Result<Vec<Record>> {
            Ok(Vec::new())
        }

        fn persist(&self, _records: &[Record]) -> Result<()> {
            Err(GestadError::InvalidInput("disque plein".to_string()))
        }
    }

    #[test]
    fn open_loads_the_persisted_sequence_in_order() {
        let backend = InMemoryStore::seeded(vec![record(1, "A"), record(2, "B")]);
        let store = RecordStore::open(backend).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].full_name, "A");
        assert_eq!(store.records()[1].full_name, "B");
    }

    #[test]
    fn next_id_is_one_for_an_empty_store() {
        let store = RecordStore::open(InMemoryStore::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn next_id_is_max_plus_one_not_len_plus_one() {
        // A sparse sequence (ids 2 and 9) must yield 10, not 3.
        let backend = InMemoryStore::seeded(vec![record(2, "A"), record(9, "B")]);
        let store = RecordStore::open(backend).unwrap();
        assert_eq!(store.next_id(), 10);
    }

    #[test]
    fn next_id_saturates_at_the_id_ceiling() {
        // A hand-edited file may legitimately carry the ceiling id.
        let backend = InMemoryStore::seeded(vec![record(u32::MAX, "A")]);
        let store = RecordStore::open(backend).unwrap();
        assert_eq!(store.next_id(), u32::MAX);
    }

    #[test]
    fn next_id_reuses_the_slot_after_deleting_the_highest_id() {
        let backend = InMemoryStore::seeded(vec![record(1, "A"), record(2, "B"), record(3, "C")]);
        let mut store = RecordStore::open(backend).unwrap();

        assert!(store.remove(3).is_some());
        assert_eq!(store.next_id(), 3);

        assert!(store.remove(1).is_some());
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn find_returns_the_matching_record() {
        let backend = InMemoryStore::seeded(vec![record(1, "A"), record(5, "B")]);
        let store = RecordStore::open(backend).unwrap();
        assert_eq!(store.find(5).unwrap().full_name, "B");
        assert!(store.find(4).is_none());
    }

    #[test]
    fn save_reports_success_and_persists_the_sequence() {
        let mut store = RecordStore::open(InMemoryStore::new()).unwrap();
        store.push(record(1, "A"));

        assert_eq!(store.save(), SaveOutcome::Saved);
        assert_eq!(store.backend.persisted().len(), 1);
    }

    #[test]
    fn failed_save_keeps_the_in_memory_mutation() {
        let mut store = RecordStore::open(FailingBackend).unwrap();
        store.push(record(1, "A"));

        let outcome = store.save();
        assert!(!outcome.is_saved());
        assert!(matches!(outcome, SaveOutcome::Failed(ref reason) if reason.contains("disque")));
        // The mutation survives in memory even though the write failed.
        assert_eq!(store.len(), 1);
    }
}
