use crate::commands::helpers::parse_salary;
use crate::commands::{CmdMessage, CmdResult, RecordDraft};
use crate::error::Result;
use crate::model::{self, Record};
use crate::store::records::{RecordStore, SaveOutcome};
use crate::store::StorageBackend;

/// Create a record from a draft, assign it the next free id and persist
/// the whole sequence.
///
/// The salary is validated before anything else happens; a bad draft
/// leaves the store untouched and no id is consumed.
pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, draft: RecordDraft) -> Result<CmdResult> {
    let salary = parse_salary(&draft.salary)?;

    let record = Record {
        id: store.next_id(),
        full_name: draft.full_name,
        badge_number: draft.badge_number,
        department: draft.department,
        position: draft.position,
        hire_date: draft.hire_date,
        salary,
        created_at: model::timestamp_now(),
    };

    store.push(record.clone());
    let save = store.save();

    let mut result = CmdResult::default()
        .with_affected_records(vec![record])
        .with_save(save.clone());
    match save {
        SaveOutcome::Saved => {
            result.add_message(CmdMessage::success("Enregistrement ajouté avec succès !"));
        }
        SaveOutcome::Failed(reason) => {
            result.add_message(CmdMessage::error(format!(
                "Erreur lors de la sauvegarde : {}",
                reason
            )));
            result.add_message(CmdMessage::error("Erreur lors de l'ajout"));
        }
    }
    Ok(result)
}
