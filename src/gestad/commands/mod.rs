use crate::model::Record;
use crate::store::records::SaveOutcome;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub stats: Option<stats::Stats>,
    pub save: Option<SaveOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_stats(mut self, stats: stats::Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_save(mut self, save: SaveOutcome) -> Self {
        self.save = Some(save);
        self
    }
}

/// Field values captured for a new record. The salary arrives as the raw
/// text the operator typed; validation happens inside the add operation so
/// nothing is assigned an id before the input is known good.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub full_name: String,
    pub badge_number: String,
    pub department: String,
    pub hire_date: String,
    pub position: String,
    pub salary: String,
}

/// Per-field edit decision. `Keep` leaves the stored value untouched,
/// `Replace` overwrites it, including with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldEdit<T> {
    #[default]
    Keep,
    Replace(T),
}

/// Edits to apply to an existing record. The id and creation timestamp are
/// immutable and have no slot here. A replacement salary stays textual
/// until the update operation validates it.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub full_name: FieldEdit<String>,
    pub badge_number: FieldEdit<String>,
    pub department: FieldEdit<String>,
    pub position: FieldEdit<String>,
    pub hire_date: FieldEdit<String>,
    pub salary: FieldEdit<String>,
}
