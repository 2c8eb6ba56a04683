use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format of the `date_creation` stamp (local time).
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One employee entry.
///
/// Field names are English in code; the JSON wire keys keep the historical
/// French names so existing data files stay readable. Declaration order is
/// wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    #[serde(rename = "nom")]
    pub full_name: String,
    #[serde(rename = "matricule")]
    pub badge_number: String,
    #[serde(rename = "service")]
    pub department: String,
    #[serde(rename = "poste")]
    pub position: String,
    /// `JJ/MM/AAAA`, stored verbatim, never parsed as a date.
    #[serde(rename = "date_embauche")]
    pub hire_date: String,
    #[serde(rename = "salaire")]
    pub salary: f64,
    /// Set once at creation, immutable afterwards.
    #[serde(rename = "date_creation")]
    pub created_at: String,
}

/// Current local time in the `date_creation` format.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
