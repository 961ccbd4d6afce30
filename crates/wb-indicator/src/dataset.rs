// File: crates/wb-indicator/src/dataset.rs
// Summary: The fetched record collection and its JSON document on disk.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::atomic::write_atomically;
use crate::error::DatasetError;

/// Records in API page/record order, kept exactly as the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorDataset {
    pub records: Vec<serde_json::Value>,
}

impl IndicatorDataset {
    pub fn new(records: Vec<serde_json::Value>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let bytes = std::fs::read(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the whole collection as one JSON array, replacing any previous file.
    pub fn save(&self, path: &Path) -> Result<(), DatasetError> {
        let bytes = serde_json::to_vec(self).map_err(DatasetError::Serialize)?;
        write_atomically(path, &bytes).map_err(|source| DatasetError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), records = self.len(), "wrote JSON document");
        Ok(())
    }
}
