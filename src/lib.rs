//! A Rust library for suggesting diseases from a list of symptoms, ranked
//! against a tabular disease/symptom catalog.
//!
//! The catalog is loaded once from CSV or Parquet, queries are scored with a
//! fixed-weight composite of Jaccard similarity, coverage and precision, and
//! results are de-duplicated by disease with perfect matches always surfaced.

pub mod algorithm;
pub mod catalog;
pub mod checker;
pub mod config;
pub mod error;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use catalog::{CatalogSchema, DiseaseRecord, SymptomCatalog};
pub use config::SymptomCheckerConfig;
pub use error::{DataLoadError, Result, SymptomCheckerError};

// Matching
pub use algorithm::matching::{MatchResult, QueryTokens, SimilarityScore, SymptomMatcher};

// Service facade
pub use checker::{
    Advisory, Assessment, Outcome, SymptomChecker, predict_diseases, shared_catalog,
};
