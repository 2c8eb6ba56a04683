use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GestadError, Result};
use crate::store::records::{RecordStore, SaveOutcome};
use crate::store::StorageBackend;

/// Remove the record with the given id and persist the remaining sequence.
/// Confirmation is the caller's business; by the time this runs the
/// decision is made.
pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, id: u32) -> Result<CmdResult> {
    let removed = store.remove(id).ok_or(GestadError::NotFound(id))?;

    let save = store.save();
    let mut result = CmdResult::default()
        .with_affected_records(vec![removed])
        .with_save(save.clone());
    match save {
        SaveOutcome::Saved => {
            result.add_message(CmdMessage::success("Enregistrement supprimé avec succès !"));
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
