use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GestadError {
    /// No record carries the requested id (update/delete).
    #[error("aucun enregistrement avec l'id {0}")]
    NotFound(u32),

    /// Rejected before any mutation: non-numeric salary, blank search term.
    #[error("saisie invalide : {0}")]
    InvalidInput(String),

    #[error("erreur d'entrée/sortie : {0}")]
    Io(#[from] std::io::Error),

    #[error("erreur de sérialisation : {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file exists but is not a valid record array. Fatal at
    /// startup; no recovery or backup is attempted.
    #[error("fichier de données corrompu ({}) : {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GestadError>;
