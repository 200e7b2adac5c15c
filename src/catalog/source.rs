//! Reading catalog sources into arrow record batches
//!
//! CSV sources have their column types inferred from the data; Parquet
//! sources carry their own schema.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::DataLoadError;
use crate::error::util::{safe_open_file, unreadable};

/// Supported on-disk formats for a symptom catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Parquet,
}

impl SourceFormat {
    /// Detect the format from a file extension (case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "parquet" | "pq" => Some(Self::Parquet),
            _ => None,
        }
    }
}

/// Read a whole catalog source into memory
///
/// # Returns
/// The source schema and every record batch, in file order
pub fn read_table(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), DataLoadError> {
    match SourceFormat::from_path(path) {
        Some(SourceFormat::Csv) => read_csv(path),
        Some(SourceFormat::Parquet) => read_parquet(path),
        None => Err(DataLoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Read a CSV file with a header row, inferring column types
pub fn read_csv(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), DataLoadError> {
    let mut file = safe_open_file(path, "reading symptom catalog")?;

    let (schema, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, None)?;
    let schema = Arc::new(schema);

    file.rewind()
        .map_err(|e| unreadable(path, "Failed to rewind after schema inference", e))?;

    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .build(file)?;

    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok((schema, batches))
}

/// Read a Parquet file
pub fn read_parquet(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), DataLoadError> {
    let file = safe_open_file(path, "reading symptom catalog")?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = Arc::clone(builder.schema());
    let reader = builder.build()?;

    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok((schema, batches))
}
