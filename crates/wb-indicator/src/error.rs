// File: crates/wb-indicator/src/error.rs
// Summary: Error types for each pipeline stage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while paging through the indicator API or saving the result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid base URL {url}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("page {page}: response is not JSON: {source}")]
    NotJson {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with its own error object instead of data.
    #[error("page {page}: API error: {message}")]
    Api { page: u32, message: String },

    #[error("page {page}: malformed response: {reason}")]
    Malformed { page: u32, reason: String },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Errors reading or writing the JSON document.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a JSON array of records: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors projecting records into tabular rows.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Tabular(#[from] TabularError),
}

/// Errors reading or writing the delimited file.
#[derive(Debug, Error)]
pub enum TabularError {
    #[error("tabular file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected header {found:?}, expected {expected:?}")]
    Header {
        found: Vec<String>,
        expected: Vec<&'static str>,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unknown text encoding label '{0}'")]
    UnknownLabel(String),

    #[error("character {character:?} cannot be encoded as {encoding}")]
    Unmappable {
        encoding: &'static str,
        character: char,
    },
}

#[derive(Debug, Error)]
pub enum CohortError {
    #[error("{country}: {field} value '{value}' is not a number")]
    InvalidNumber {
        country: String,
        field: &'static str,
        value: String,
    },
}
