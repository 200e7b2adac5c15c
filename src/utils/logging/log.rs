//! Log lines emitted while loading a symptom catalog

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

/// Figures reported once a catalog has been built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLoadSummary {
    /// Disease rows kept, duplicates included
    pub records: usize,
    /// Distinct normalised disease names
    pub diseases: usize,
    /// Distinct symptom tokens across all columns
    pub vocabulary: usize,
    pub elapsed: Duration,
}

impl CatalogLoadSummary {
    /// Single completion line for the catalog at `path`
    #[must_use]
    pub fn describe(&self, path: &Path) -> String {
        format!(
            "Loaded {} disease rows ({} distinct diseases, {} symptoms) from {} in {:.2?}",
            self.records,
            self.diseases,
            self.vocabulary,
            path.display(),
            self.elapsed
        )
    }
}

pub fn log_catalog_load_start(path: &Path) {
    info!("Loading symptom catalog from {}", path.display());
}

/// Log the completion line, warning first when no rows survived
pub fn log_catalog_loaded(path: &Path, summary: &CatalogLoadSummary) {
    if summary.records == 0 {
        warn!("Symptom catalog {} contains no disease rows", path.display());
    }
    info!("{}", summary.describe(path));
}

/// Warn about a symptom column holding `count` cells that are not 0/1
pub fn log_malformed_cells(column: &str, count: usize) {
    if count > 0 {
        warn!("Column '{column}' has {count} cells that are not 0/1; treating them as absent");
    }
}

/// Warn about a data row (1-based) dropped for lacking a disease name
pub fn log_skipped_row(row: usize, disease_column: &str) {
    warn!("Skipping row {row}: missing value in '{disease_column}' column");
}
