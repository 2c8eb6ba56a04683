use crate::commands::helpers::parse_salary;
use crate::commands::{CmdMessage, CmdResult, FieldEdit, RecordPatch};
use crate::error::{GestadError, Result};
use crate::store::records::{RecordStore, SaveOutcome};
use crate::store::StorageBackend;

fn apply(field: &mut String, edit: FieldEdit<String>) {
    if let FieldEdit::Replace(value) = edit {
        *field = value;
    }
}

/// Apply a patch to the record with the given id and persist the sequence.
///
/// All-or-nothing: the id must exist and a replacement salary must parse
/// before any field is written, so a rejected patch changes nothing.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    id: u32,
    patch: RecordPatch,
) -> Result<CmdResult> {
    if store.find(id).is_none() {
        return Err(GestadError::NotFound(id));
    }
    let salary = match &patch.salary {
        FieldEdit::Replace(raw) => Some(parse_salary(raw)?),
        FieldEdit::Keep => None,
    };

    let record = store.find_mut(id).ok_or(GestadError::NotFound(id))?;
    apply(&mut record.full_name, patch.full_name);
    apply(&mut record.badge_number, patch.badge_number);
    apply(&mut record.department, patch.department);
    apply(&mut record.position, patch.position);
    apply(&mut record.hire_date, patch.hire_date);
    if let Some(salary) = salary {
        record.salary = salary;
    }
    let updated = record.clone();

    let save = store.save();
    let mut result = CmdResult::default()
        .with_affected_records(vec![updated])
        .with_save(save.clone());
    match save {
        SaveOutcome::Saved => {
            result.add_message(CmdMessage::success("Enregistrement modifié avec succès !"));
        }
        SaveOutcome::Failed(reason) => {
            result.add_message(CmdMessage::error(format!(
                "Erreur lors de la sauvegarde : {}",
                reason
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    fn record(id: u32) -> Record {
        Record {
            id,
            full_name: "Alice Martin".to_string(),
            badge_number: "M001".to_string(),
            department: "Comptabilité".to_string(),
            position: "Comptable".to_string(),
            hire_date: "15/03/2023".to_string(),
            salary: 2500.0,
            created_at: "15/03/2023 09:00:00".to_string(),
        }
    }

    fn seeded_store() -> RecordStore<InMemoryStore> {
        RecordStore::open(InMemoryStore::seeded(vec![record(1)])).unwrap()
    }

    #[test]
    fn unknown_id_is_rejected_before_validation() {
        let mut store = seeded_store();
        let patch = RecordPatch {
            salary: FieldEdit::Replace("pas un nombre".to_string()),
            ..RecordPatch::default()
        };

        // The id check wins over the bad salary.
        let err = run(&mut store, 99, patch).unwrap_err();
        assert!(matches!(err, GestadError::NotFound(99)));
    }

    #[test]
    fn invalid_salary_leaves_the_record_untouched() {
        let mut store = seeded_store();
        let patch = RecordPatch {
            full_name: FieldEdit::Replace("Autre Nom".to_string()),
            salary: FieldEdit::Replace("abc".to_string()),
            ..RecordPatch::default()
        };

        let err = run(&mut store, 1, patch).unwrap_err();
        assert!(matches!(err, GestadError::InvalidInput(_)));
        // No partial write: the name edit was discarded along with the salary.
        assert_eq!(store.find(1).unwrap().full_name, "Alice Martin");
        assert_eq!(store.backend.persisted()[0].full_name, "Alice Martin");
    }

    #[test]
    fn keep_preserves_and_replace_overwrites() {
        let mut store = seeded_store();
        let patch = RecordPatch {
            department: FieldEdit::Replace("Informatique".to_string()),
            salary: FieldEdit::Replace("2800.50".to_string()),
            ..RecordPatch::default()
        };

        let result = run(&mut store, 1, patch).unwrap();
        let updated = &result.affected_records[0];
        assert_eq!(updated.full_name, "Alice Martin");
        assert_eq!(updated.department, "Informatique");
        assert_eq!(updated.salary, 2800.50);
    }

    #[test]
    fn replacing_with_an_empty_string_blanks_the_field() {
        let mut store = seeded_store();
        let patch = RecordPatch {
            position: FieldEdit::Replace(String::new()),
            ..RecordPatch::default()
        };

        run(&mut store, 1, patch).unwrap();
        assert_eq!(store.find(1).unwrap().position, "");
    }

    #[test]
    fn id_and_creation_timestamp_are_immutable() {
        let mut store = seeded_store();
        let patch = RecordPatch {
            full_name: FieldEdit::Replace("Autre Nom".to_string()),
            ..RecordPatch::default()
        };

        run(&mut store, 1, patch).unwrap();
        let updated = store.find(1).unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.created_at, "15/03/2023 09:00:00");
    }

    #[test]
    fn an_all_keep_patch_still_saves() {
        let mut store = seeded_store();
        let result = run(&mut store, 1, RecordPatch::default()).unwrap();

        assert_eq!(result.save, Some(SaveOutcome::Saved));
        assert_eq!(store.backend.persisted().len(), 1);
    }
}
