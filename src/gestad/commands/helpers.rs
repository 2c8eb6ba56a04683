use crate::error::{GestadError, Result};

/// Parse operator-typed salary text into a number.
///
/// Leading and trailing whitespace is tolerated; anything `f64` cannot parse
/// is rejected before any record is touched.
pub fn parse_salary(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| {
        GestadError::InvalidInput(format!("salaire non numérique : \"{}\"", trimmed))
    })
}
