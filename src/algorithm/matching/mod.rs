//! Symptom-to-disease matching
//!
//! This module implements the matching pipeline:
//!
//! 1. Query tokenisation with the catalog's normalisation rules
//! 2. Composite similarity scoring, sequential or parallel
//! 3. Ranking with de-duplication and the exact-match override

pub mod matcher;
pub mod parallel;
pub mod ranker;
pub mod score;
pub mod sequential;
pub mod tokens;
pub mod types;

// Re-export key types
pub use matcher::SymptomMatcher;
pub use ranker::rank;
pub use score::{SimilarityScore, score};
pub use tokens::{QueryTokens, normalize_token};
pub use types::{MatchResult, ScoredRecord};
