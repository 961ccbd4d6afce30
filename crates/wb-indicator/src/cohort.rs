// File: crates/wb-indicator/src/cohort.rs
// Summary: Per-cohort series extraction from tabular rows.

use crate::error::CohortError;
use crate::tabular::TabularRow;

/// Country label of the aggregate series.
pub const WORLD: &str = "World";

/// Income-level cohorts, in plotting order.
pub const INCOME_LEVELS: [&str; 4] = ["Low income", "Lower middle income", "Upper middle income", "High income"];

/// Chronologically ascending (year, value) points for one Country label.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl CohortSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Rows with every field present.
pub fn complete_rows(rows: &[TabularRow]) -> impl Iterator<Item = &TabularRow> {
    rows.iter().filter(|r| r.is_complete())
}

/// Complete rows whose Country equals `label`, reversed from the file's
/// newest-first order into ascending years.
pub fn select_cohort(rows: &[TabularRow], label: &str) -> Result<CohortSeries, CohortError> {
    let mut points = complete_rows(rows)
        .filter(|r| r.country == label)
        .map(|r| -> Result<(f64, f64), CohortError> {
            Ok((number(r, "Year", &r.year)?, number(r, "Sanitation", &r.sanitation)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    points.reverse();
    Ok(CohortSeries { label: label.to_string(), points })
}

fn number(row: &TabularRow, field: &'static str, value: &str) -> Result<f64, CohortError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CohortError::InvalidNumber {
            country: row.country.clone(),
            field,
            value: value.to_string(),
        })
}
