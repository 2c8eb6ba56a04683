use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;

/// Return every record in insertion order.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_records(store.records().to_vec());
    if store.is_empty() {
        result.add_message(CmdMessage::info("Aucun enregistrement trouvé."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    fn record(id: u32, name: &str) -> Record {
        Record {
            id,
            full_name: name.to_string(),
            badge_number: format!("M{:03}", id),
            department: "Logistique".to_string(),
            position: "Agent".to_string(),
            hire_date: "01/02/2022".to_string(),
            salary: 1900.0,
            created_at: "01/02/2022 08:30:00".to_string(),
        }
    }

    #[test]
    fn lists_all_records_in_insertion_order() {
        let backend = InMemoryStore::seeded(vec![record(1, "A"), record(2, "B"), record(3, "C")]);
        let store = RecordStore::open(backend).unwrap();

        let result = run(&store).unwrap();
        let names: Vec<_> = result.listed_records.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_reports_the_empty_case() {
        let store = RecordStore::open(InMemoryStore::new()).unwrap();
        let result = run(&store).unwrap();
        assert!(result.listed_records.is_empty());

        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
        assert_eq!(result.messages[0].content, "Aucun enregistrement trouvé.");
    }
}
