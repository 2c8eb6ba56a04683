use super::StorageBackend;
use crate::error::{GestadError, Result};
use crate::model::Record;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::PathBuf;

/// Production backend: the whole store as one JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// The historical on-disk shape: 4-space indent, non-ASCII literal.
    fn to_pretty_json(records: &[Record]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl StorageBackend for JsonFileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| GestadError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;
        let bytes = Self::to_pretty_json(records)?;

        // Write to a sibling file then rename, so a failed write never
        // truncates the existing data.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
