// File: crates/wb-indicator/src/transform.rs
// Summary: Project fetched records into tabular rows and write the tabular file.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::codec::TextCodec;
use crate::dataset::IndicatorDataset;
use crate::error::TransformError;
use crate::record::IndicatorRecord;
use crate::tabular::{write_tabular, TabularRow};

impl From<&IndicatorRecord> for TabularRow {
    fn from(r: &IndicatorRecord) -> Self {
        Self {
            country_id: r.country.id.clone(),
            country: r.country.value.clone(),
            year: r.date.to_string(),
            sanitation: r.value.as_ref().map(|v| v.to_string()).unwrap_or_default(),
            decimal: r.decimal.to_string(),
        }
    }
}

/// One row per record, in record order. The first record missing a field fails the whole projection.
pub fn project(dataset: &IndicatorDataset) -> Result<Vec<TabularRow>, TransformError> {
    dataset
        .records
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            IndicatorRecord::deserialize(raw)
                .map(|r| TabularRow::from(&r))
                .map_err(|source| TransformError::InvalidRecord { index, source })
        })
        .collect()
}

/// Read the JSON document at `json_path` and write the tabular file at `csv_path`.
/// Returns the number of data rows written.
pub fn transform_file(json_path: &Path, csv_path: &Path, codec: TextCodec) -> Result<usize, TransformError> {
    let dataset = IndicatorDataset::load(json_path)?;
    let rows = project(&dataset)?;
    write_tabular(csv_path, &rows, codec)?;
    info!(from = %json_path.display(), to = %csv_path.display(), rows = rows.len(), "transformed");
    Ok(rows.len())
}
