//! Type definitions for the matching algorithm

use std::collections::BTreeSet;

use serde::Serialize;

use crate::algorithm::matching::score::SimilarityScore;
use crate::algorithm::matching::tokens::QueryTokens;
use crate::catalog::DiseaseRecord;

/// A catalog record paired with its score for one query
///
/// Lives only for the duration of a query; the catalog itself is never
/// written to.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
    pub record: &'a DiseaseRecord,
    pub similarity: SimilarityScore,
    pub score: f64,
}

impl<'a> ScoredRecord<'a> {
    #[must_use]
    pub fn new(record: &'a DiseaseRecord, query: &QueryTokens) -> Self {
        let similarity = SimilarityScore::compute(query, record.symptom_tokens());
        Self {
            record,
            similarity,
            score: similarity.composite(),
        }
    }

    /// Query tokens also present in the record
    #[must_use]
    pub fn matched_tokens(&self, query: &QueryTokens) -> BTreeSet<String> {
        query
            .iter()
            .filter(|t| self.record.symptom_tokens().contains(*t))
            .map(str::to_string)
            .collect()
    }
}

/// One ranked disease candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Normalised disease name
    pub name: String,
    /// Disease name as written in the catalog
    pub label: String,
    /// Composite similarity in `[0, 1]`
    pub score: f64,
    /// Query symptoms the disease explains, sorted
    pub matched_tokens: BTreeSet<String>,
    /// The disease's symptom set equals the query exactly
    pub exact: bool,
}

impl MatchResult {
    #[must_use]
    pub fn from_scored(scored: &ScoredRecord<'_>, query: &QueryTokens) -> Self {
        Self {
            name: scored.record.name().to_string(),
            label: scored.record.label().to_string(),
            score: scored.score,
            matched_tokens: scored.matched_tokens(query),
            exact: scored.similarity.is_exact(),
        }
    }
}
