// File: crates/wb-indicator/src/tabular.rs
// Summary: Five-column tabular rows and their comma-delimited file.

use std::path::Path;

use tracing::info;

use crate::atomic::write_atomically;
use crate::codec::TextCodec;
use crate::error::TabularError;

/// Header row, always first in the file.
pub const HEADER: [&str; 5] = ["CountryId", "Country", "Year", "Sanitation", "Decimal"];

/// Flattened projection of one indicator record. Empty strings mean "missing".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabularRow {
    pub country_id: String,
    pub country: String,
    pub year: String,
    pub sanitation: String,
    pub decimal: String,
}

impl TabularRow {
    pub fn fields(&self) -> [&str; 5] {
        [&self.country_id, &self.country, &self.year, &self.sanitation, &self.decimal]
    }

    /// True when no field is blank.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.trim().is_empty())
    }

    fn from_record(rec: &csv::StringRecord) -> Self {
        let get = |i: usize| rec.get(i).unwrap_or_default().to_string();
        Self { country_id: get(0), country: get(1), year: get(2), sanitation: get(3), decimal: get(4) }
    }
}

/// Serialize header + rows, quoting only where needed, then encode with `codec`.
pub fn to_bytes(rows: &[TabularRow], codec: TextCodec) -> Result<Vec<u8>, TabularError> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row.fields())?;
    }
    let utf8 = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    // csv only ever writes the UTF-8 we handed it
    let text = String::from_utf8_lossy(&utf8);
    Ok(codec.encode(&text)?.into_owned())
}

/// Parse a tabular file's bytes, checking the header.
pub fn from_bytes(bytes: &[u8], codec: TextCodec) -> Result<Vec<TabularRow>, TabularError> {
    let text = codec.decode(bytes);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?;
    if headers.iter().map(str::trim).ne(HEADER.iter().copied()) {
        return Err(TabularError::Header {
            found: headers.iter().map(str::to_string).collect(),
            expected: HEADER.to_vec(),
        });
    }

    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(TabularRow::from_record(&rec?));
    }
    Ok(rows)
}

/// Write the tabular file, replacing any previous one.
pub fn write_tabular(path: &Path, rows: &[TabularRow], codec: TextCodec) -> Result<(), TabularError> {
    let bytes = to_bytes(rows, codec)?;
    write_atomically(path, &bytes).map_err(|source| TabularError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = rows.len(), encoding = %codec, "wrote tabular file");
    Ok(())
}

pub fn read_tabular(path: &Path, codec: TextCodec) -> Result<Vec<TabularRow>, TabularError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TabularError::NotFound { path: path.to_path_buf() }
        } else {
            TabularError::Read { path: path.to_path_buf(), source }
        }
    })?;
    let rows = from_bytes(&bytes, codec)?;
    info!(path = %path.display(), rows = rows.len(), encoding = %codec, "read tabular file");
    Ok(rows)
}
