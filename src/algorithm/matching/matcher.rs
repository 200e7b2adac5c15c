//! Query entry point for symptom matching
//!
//! The `SymptomMatcher` ties the pipeline together: tokenise the query,
//! score every catalog record, then rank.

use log::debug;

use crate::algorithm::matching::parallel::score_parallel;
use crate::algorithm::matching::ranker::rank;
use crate::algorithm::matching::sequential::score_sequential;
use crate::algorithm::matching::tokens::QueryTokens;
use crate::algorithm::matching::types::{MatchResult, ScoredRecord};
use crate::catalog::SymptomCatalog;

/// Matcher ranking catalog diseases against symptom queries
#[derive(Debug, Clone, Copy)]
pub struct SymptomMatcher<'a> {
    catalog: &'a SymptomCatalog,
    parallel_threshold: usize,
}

impl<'a> SymptomMatcher<'a> {
    /// Catalog size from which scoring runs on the rayon pool
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

    /// Create a matcher over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a SymptomCatalog) -> Self {
        Self {
            catalog,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Override the catalog size at which scoring goes parallel
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Score every record against `query`, in catalog order
    #[must_use]
    pub fn score_all(&self, query: &QueryTokens) -> Vec<ScoredRecord<'a>> {
        let records = self.catalog.records();
        if records.len() >= self.parallel_threshold {
            score_parallel(records, query)
        } else {
            score_sequential(records, query)
        }
    }

    /// Rank diseases for a comma-separated symptom string
    ///
    /// Returns an empty list without scoring anything if the string holds no
    /// symptoms.
    #[must_use]
    pub fn predict(&self, symptoms: &str, top_n: usize, min_score: f64) -> Vec<MatchResult> {
        self.predict_tokens(&QueryTokens::parse(symptoms), top_n, min_score)
    }

    /// Rank diseases for an already-parsed query
    #[must_use]
    pub fn predict_tokens(
        &self,
        query: &QueryTokens,
        top_n: usize,
        min_score: f64,
    ) -> Vec<MatchResult> {
        if query.is_empty() {
            debug!("Empty symptom query, nothing to score");
            return Vec::new();
        }

        debug!(
            "Matching {} symptoms against {} catalog records",
            query.len(),
            self.catalog.len()
        );

        rank(self.score_all(query), query, top_n, min_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SymptomCatalog {
        SymptomCatalog::from_records(vec![
            ("Flu", vec!["fever", "cough", "fatigue"]),
            ("Cold", vec!["cough", "sneezing"]),
            ("Migraine", vec!["headache", "nausea"]),
        ])
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let catalog = catalog();
        let query = QueryTokens::parse("cough, fever");

        let sequential = SymptomMatcher::new(&catalog)
            .with_parallel_threshold(usize::MAX)
            .predict_tokens(&query, 3, 0.0);
        let parallel = SymptomMatcher::new(&catalog)
            .with_parallel_threshold(0)
            .predict_tokens(&query, 3, 0.0);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_score_all_preserves_order() {
        let catalog = catalog();
        let query = QueryTokens::parse("headache");
        let scored = SymptomMatcher::new(&catalog)
            .with_parallel_threshold(0)
            .score_all(&query);

        let positions: Vec<usize> = scored.iter().map(|s| s.record.position()).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_query() {
        let catalog = catalog();
        assert!(SymptomMatcher::new(&catalog).predict(" , ", 3, 0.0).is_empty());
    }
}
