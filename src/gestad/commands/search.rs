use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GestadError, Result};
use crate::store::records::RecordStore;
use crate::store::StorageBackend;

/// Case-insensitive substring search over name, badge number and
/// department. The position field is deliberately not searched.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, term: &str) -> Result<CmdResult> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Err(GestadError::InvalidInput(
            "terme de recherche vide".to_string(),
        ));
    }

    let matches: Vec<_> = store
        .records()
        .iter()
        .filter(|r| {
            r.full_name.to_lowercase().contains(&needle)
                || r.badge_number.to_lowercase().contains(&needle)
                || r.department.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed_records(matches);
    if result.listed_records.is_empty() {
        result.add_message(CmdMessage::info("Aucun enregistrement trouvé."));
    }
    Ok(result)
}
