//! Logging helpers for catalog loading

pub mod log;

pub use self::log::{
    CatalogLoadSummary, log_catalog_load_start, log_catalog_loaded, log_malformed_cells,
    log_skipped_row,
};
