//! Disease/symptom catalog
//!
//! A [`SymptomCatalog`] is loaded once from a table with one disease-name
//! column and any number of 0/1 symptom indicator columns. Each row becomes a
//! [`DiseaseRecord`] holding the set of symptom tokens marked 1 in that row.
//!
//! Disease names are not de-duplicated here: several rows may describe the
//! same disease with different symptom sets. Records keep their load order,
//! which the ranker relies on to break ties.
//!
//! The catalog is immutable once built. Scores are never stored on records.

pub mod indicators;
pub mod schema;
pub mod source;

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::algorithm::matching::tokens::normalize_token;
use crate::error::DataLoadError;
use crate::utils::logging::{
    CatalogLoadSummary, log_catalog_load_start, log_catalog_loaded, log_malformed_cells,
    log_skipped_row,
};

pub use indicators::{IndicatorColumn, extract_indicators};
pub use schema::{CatalogSchema, DISEASE_COLUMN, IndicatorKind, SymptomColumn};
pub use source::SourceFormat;

/// One row of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseRecord {
    name: String,
    label: String,
    symptom_tokens: FxHashSet<String>,
    position: usize,
}

impl DiseaseRecord {
    /// Normalised disease name, used to de-duplicate results
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Disease name as written in the source (trimmed)
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn symptom_tokens(&self) -> &FxHashSet<String> {
        &self.symptom_tokens
    }

    /// Position of the record in catalog load order
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Immutable, ordered collection of disease records
#[derive(Debug, Clone, Default)]
pub struct SymptomCatalog {
    records: Vec<DiseaseRecord>,
    vocabulary: Vec<String>,
}

impl SymptomCatalog {
    /// Load a catalog from a `.csv` or `.parquet` file
    ///
    /// Fails fast: any error leaves no partial catalog behind.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let start = Instant::now();
        log_catalog_load_start(path);

        let (schema, batches) = source::read_table(path)?;
        let catalog = Self::from_batches(&schema, &batches)?;

        log_catalog_loaded(
            path,
            &CatalogLoadSummary {
                records: catalog.len(),
                diseases: catalog.disease_names().len(),
                vocabulary: catalog.vocabulary.len(),
                elapsed: start.elapsed(),
            },
        );

        Ok(catalog)
    }

    /// Build a catalog from record batches sharing `schema`
    pub fn from_batches(schema: &Schema, batches: &[RecordBatch]) -> Result<Self, DataLoadError> {
        let layout = CatalogSchema::from_arrow(schema)?;
        let columns = layout.symptom_columns();

        let mut records = Vec::new();
        let mut malformed = vec![0usize; columns.len()];
        let mut row_offset = 0usize;

        for batch in batches {
            let names = cast(batch.column(layout.disease_index()), &DataType::Utf8)?;
            let names = names.as_string::<i32>();

            let indicators = columns
                .iter()
                .map(|c| extract_indicators(batch.column(c.index), c.kind))
                .collect::<Result<Vec<_>, _>>()?;

            for (count, indicator) in malformed.iter_mut().zip(&indicators) {
                *count += indicator.malformed;
            }

            for row in 0..batch.num_rows() {
                let label = if names.is_null(row) {
                    ""
                } else {
                    names.value(row).trim()
                };

                if label.is_empty() {
                    log_skipped_row(row_offset + row + 1, layout.disease_name());
                    continue;
                }

                let symptom_tokens = columns
                    .iter()
                    .zip(&indicators)
                    .filter(|(_, indicator)| indicator.present[row])
                    .map(|(column, _)| column.token.clone())
                    .collect();

                records.push(DiseaseRecord {
                    name: normalize_token(label),
                    label: label.to_string(),
                    symptom_tokens,
                    position: records.len(),
                });
            }

            row_offset += batch.num_rows();
        }

        for (column, count) in columns.iter().zip(malformed) {
            log_malformed_cells(&column.source_name, count);
        }

        Ok(Self {
            records,
            vocabulary: layout.vocabulary().into_iter().collect(),
        })
    }

    /// Build a catalog from in-memory `(disease, symptoms)` rows
    ///
    /// Names and symptoms are normalised exactly as on load; rows with a blank
    /// disease name are skipped.
    pub fn from_records<I, N, S, T>(rows: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: AsRef<str>,
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut records: Vec<DiseaseRecord> = Vec::new();
        for (name, symptoms) in rows {
            let label = name.as_ref().trim();
            if label.is_empty() {
                continue;
            }

            let symptom_tokens = symptoms
                .into_iter()
                .map(|s| normalize_token(s.as_ref()))
                .filter(|t| !t.is_empty())
                .collect();

            records.push(DiseaseRecord {
                name: normalize_token(label),
                label: label.to_string(),
                symptom_tokens,
                position: records.len(),
            });
        }

        let vocabulary = records
            .iter()
            .flat_map(|r| r.symptom_tokens.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect_vec();

        Self {
            records,
            vocabulary,
        }
    }

    /// Records in load order
    #[must_use]
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every known symptom token, sorted and distinct
    #[must_use]
    pub fn symptom_vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Distinct normalised disease names, in first-seen order
    #[must_use]
    pub fn disease_names(&self) -> Vec<&str> {
        self.records.iter().map(DiseaseRecord::name).unique().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{ArrayRef, Int64Array, StringArray};
    use arrow::datatypes::Field;
    use std::sync::Arc;

    fn batch() -> (Schema, RecordBatch) {
        let schema = Schema::new(vec![
            Field::new("Disease", DataType::Utf8, true),
            Field::new("Fever", DataType::Int64, true),
            Field::new("Cough", DataType::Int64, true),
            Field::new("Joint Pain", DataType::Int64, true),
        ]);
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(vec![Some(" Flu "), Some("Arthritis"), None, Some("Flu")])),
            Arc::new(Int64Array::from(vec![Some(1), Some(0), Some(1), Some(1)])),
            Arc::new(Int64Array::from(vec![Some(1), None, Some(1), Some(7)])),
            Arc::new(Int64Array::from(vec![Some(0), Some(1), Some(0), Some(0)])),
        ];
        let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns).unwrap();
        (schema, batch)
    }

    #[test]
    fn test_from_batches_builds_token_sets() {
        let (schema, batch) = batch();
        let catalog = SymptomCatalog::from_batches(&schema, &[batch]).unwrap();

        // The row with a null disease name is dropped
        assert_eq!(catalog.len(), 3);

        let flu = &catalog.records()[0];
        assert_eq!(flu.name(), "flu");
        assert_eq!(flu.label(), "Flu");
        assert_eq!(flu.position(), 0);
        assert!(flu.symptom_tokens().contains("fever"));
        assert!(flu.symptom_tokens().contains("cough"));
        assert_eq!(flu.symptom_tokens().len(), 2);

        let arthritis = &catalog.records()[1];
        assert_eq!(arthritis.symptom_tokens().len(), 1);
        assert!(arthritis.symptom_tokens().contains("joint_pain"));

        // Malformed cell (7) counts as absent
        let second_flu = &catalog.records()[2];
        assert_eq!(second_flu.position(), 2);
        assert_eq!(second_flu.symptom_tokens().len(), 1);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let (schema, batch) = batch();
        let catalog = SymptomCatalog::from_batches(&schema, &[batch]).unwrap();

        assert_eq!(catalog.disease_names(), vec!["flu", "arthritis"]);
        assert_eq!(
            catalog.records().iter().filter(|r| r.name() == "flu").count(),
            2
        );
    }

    #[test]
    fn test_vocabulary_from_columns() {
        let (schema, batch) = batch();
        let catalog = SymptomCatalog::from_batches(&schema, &[batch]).unwrap();

        assert_eq!(
            catalog.symptom_vocabulary(),
            &["cough".to_string(), "fever".to_string(), "joint_pain".to_string()]
        );
    }

    #[test]
    fn test_from_records_normalises() {
        let catalog = SymptomCatalog::from_records(vec![
            ("Common Cold", vec!["Runny Nose", "sneezing"]),
            ("  ", vec!["fever"]),
        ]);

        assert_eq!(catalog.len(), 1);
        let record = &catalog.records()[0];
        assert_eq!(record.name(), "common_cold");
        assert_eq!(record.label(), "Common Cold");
        assert!(record.symptom_tokens().contains("runny_nose"));
        assert_eq!(catalog.symptom_vocabulary(), &["runny_nose".to_string(), "sneezing".to_string()]);
    }
}
