//! Explicit, validated schema of a disease/symptom table
//!
//! The raw table is only trusted after it has been mapped onto a
//! [`CatalogSchema`]: one disease-name column plus a typed list of symptom
//! indicator columns, each with its normalised token.

use std::collections::BTreeSet;

use arrow::datatypes::{DataType, Schema};
use log::warn;
use rustc_hash::FxHashMap;

use crate::algorithm::matching::tokens::normalize_token;
use crate::error::DataLoadError;

/// Name (case-insensitive) of the column holding disease names
pub const DISEASE_COLUMN: &str = "disease";

/// How the cells of a symptom column are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    /// Integer, float or decimal values; present iff the value is 1
    Numeric,
    /// Boolean values; present iff true
    Boolean,
    /// String values such as "1", "yes", "true"
    Text,
    /// Column with no values at all (inferred as the null type)
    Empty,
}

impl IndicatorKind {
    /// Classify an arrow data type, `None` if it cannot hold an indicator
    #[must_use]
    pub fn from_data_type(data_type: &DataType) -> Option<Self> {
        match data_type {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float16
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal128(_, _)
            | DataType::Decimal256(_, _) => Some(Self::Numeric),
            DataType::Boolean => Some(Self::Boolean),
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => Some(Self::Text),
            DataType::Dictionary(_, value)
                if matches!(value.as_ref(), DataType::Utf8 | DataType::LargeUtf8) =>
            {
                Some(Self::Text)
            }
            DataType::Null => Some(Self::Empty),
            _ => None,
        }
    }
}

/// A validated symptom indicator column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomColumn {
    /// Position of the column in the source table
    pub index: usize,
    /// Column name as it appears in the source
    pub source_name: String,
    /// Normalised symptom token
    pub token: String,
    pub kind: IndicatorKind,
}

/// Typed column layout of a symptom catalog source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSchema {
    disease_index: usize,
    disease_name: String,
    symptom_columns: Vec<SymptomColumn>,
}

impl CatalogSchema {
    /// Validate an arrow schema and map it onto a catalog layout
    ///
    /// The disease column is the first whose trimmed name equals
    /// [`DISEASE_COLUMN`] ignoring case. Every other column becomes a symptom
    /// column, except columns of non-indicator types and columns whose
    /// normalised name is empty; both are skipped with a warning.
    ///
    /// # Errors
    /// Returns `DataLoadError::MissingDiseaseColumn` if no disease column exists.
    pub fn from_arrow(schema: &Schema) -> Result<Self, DataLoadError> {
        let fields = schema.fields();

        let disease_index = fields
            .iter()
            .position(|f| f.name().trim().eq_ignore_ascii_case(DISEASE_COLUMN))
            .ok_or_else(|| DataLoadError::MissingDiseaseColumn {
                columns: fields.iter().map(|f| f.name().clone()).collect(),
            })?;

        let mut symptom_columns = Vec::with_capacity(fields.len().saturating_sub(1));
        let mut first_source: FxHashMap<String, String> = FxHashMap::default();

        for (index, field) in fields.iter().enumerate() {
            if index == disease_index {
                continue;
            }

            let token = normalize_token(field.name());
            if token.is_empty() {
                warn!("Skipping column {index}: name is empty after normalisation");
                continue;
            }

            if token.eq_ignore_ascii_case(DISEASE_COLUMN) {
                warn!(
                    "Skipping column '{}': duplicate disease column",
                    field.name()
                );
                continue;
            }

            let Some(kind) = IndicatorKind::from_data_type(field.data_type()) else {
                warn!(
                    "Skipping column '{}': type {} cannot hold a 0/1 indicator",
                    field.name(),
                    field.data_type()
                );
                continue;
            };

            if let Some(previous) = first_source.get(&token) {
                warn!(
                    "Columns '{}' and '{}' both normalise to '{token}'; treating them as one symptom",
                    previous,
                    field.name()
                );
            } else {
                first_source.insert(token.clone(), field.name().clone());
            }

            symptom_columns.push(SymptomColumn {
                index,
                source_name: field.name().clone(),
                token,
                kind,
            });
        }

        Ok(Self {
            disease_index,
            disease_name: fields[disease_index].name().clone(),
            symptom_columns,
        })
    }

    /// Position of the disease-name column
    #[must_use]
    pub const fn disease_index(&self) -> usize {
        self.disease_index
    }

    /// Source name of the disease-name column
    #[must_use]
    pub fn disease_name(&self) -> &str {
        &self.disease_name
    }

    #[must_use]
    pub fn symptom_columns(&self) -> &[SymptomColumn] {
        &self.symptom_columns
    }

    /// Distinct symptom tokens, sorted
    #[must_use]
    pub fn vocabulary(&self) -> BTreeSet<String> {
        self.symptom_columns.iter().map(|c| c.token.clone()).collect()
    }
}
