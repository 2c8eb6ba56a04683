use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;

/// Salary and headcount aggregates over the whole store.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub mean_salary: f64,
    pub max_salary: f64,
    pub min_salary: f64,
    /// Headcount per department, in first-seen order.
    pub by_department: Vec<(String, usize)>,
}

/// Compute aggregates over the current records. An empty store yields a
/// result with no stats attached; there is nothing to divide by.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match compute(store.records()) {
        Some(stats) => result = result.with_stats(stats),
        None => result.add_message(CmdMessage::warning(
            "Aucune donnée disponible pour les statistiques.",
        )),
    }
    Ok(result)
}

fn compute(records: &[Record]) -> Option<Stats> {
    let first = records.first()?;

    let mut total = 0.0;
    let mut max_salary = first.salary;
    let mut min_salary = first.salary;
    let mut by_department: Vec<(String, usize)> = Vec::new();

    for record in records {
        total += record.salary;
        if record.salary > max_salary {
            max_salary = record.salary;
        }
        if record.salary < min_salary {
            min_salary = record.salary;
        }
        match by_department.iter_mut().find(|(d, _)| *d == record.department) {
            Some((_, count)) => *count += 1,
            None => by_department.push((record.department.clone(), 1)),
        }
    }

    Some(Stats {
        count: records.len(),
        mean_salary: total / records.len() as f64,
        max_salary,
        min_salary,
        by_department,
    })
}
