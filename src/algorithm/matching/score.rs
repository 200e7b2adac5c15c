//! Composite similarity between a query and a disease's symptom set
//!
//! The composite score weights three overlap ratios:
//!
//! * Jaccard: `|Q ∩ D| / |Q ∪ D|`
//! * Coverage: `|Q ∩ D| / |Q|`, how much of the reported symptoms is explained
//! * Precision: `|Q ∩ D| / |D|`, penalising diseases with many unreported symptoms
//!
//! `score = 0.4 * jaccard + 0.4 * coverage + 0.2 * precision`. The weights are
//! fixed; changing them changes the ranking contract.

use rustc_hash::FxHashSet;

use crate::algorithm::matching::tokens::QueryTokens;

pub const JACCARD_WEIGHT: f64 = 0.4;
pub const COVERAGE_WEIGHT: f64 = 0.4;
pub const PRECISION_WEIGHT: f64 = 0.2;

/// Overlap measures for one (query, disease) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScore {
    /// Number of query tokens present in the disease set
    pub intersection: usize,
    pub query_len: usize,
    pub disease_len: usize,
    pub jaccard: f64,
    pub coverage: f64,
    pub precision: f64,
}

impl SimilarityScore {
    /// Compute the overlap measures of `query` against `disease_tokens`
    ///
    /// Each ratio is 0 when its denominator is 0.
    #[must_use]
    pub fn compute(query: &QueryTokens, disease_tokens: &FxHashSet<String>) -> Self {
        let intersection = query.iter().filter(|t| disease_tokens.contains(*t)).count();
        Self::from_counts(intersection, query.len(), disease_tokens.len())
    }

    /// Build the measures from set sizes
    ///
    /// An intersection can never exceed the smaller set, so `intersection` is
    /// capped at `min(query_len, disease_len)`.
    #[must_use]
    pub fn from_counts(intersection: usize, query_len: usize, disease_len: usize) -> Self {
        let intersection = intersection.min(query_len).min(disease_len);
        let union = query_len + disease_len - intersection;
        Self {
            intersection,
            query_len,
            disease_len,
            jaccard: ratio(intersection, union),
            coverage: ratio(intersection, query_len),
            precision: ratio(intersection, disease_len),
        }
    }

    /// Weighted composite in `[0, 1]`
    #[must_use]
    pub fn composite(&self) -> f64 {
        JACCARD_WEIGHT * self.jaccard + COVERAGE_WEIGHT * self.coverage + PRECISION_WEIGHT * self.precision
    }

    /// Query and disease sets are identical (and non-empty)
    ///
    /// This holds exactly when all three ratios are 1, i.e. when the
    /// composite is a perfect 1.0, but does not depend on float summation.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.intersection > 0
            && self.intersection == self.query_len
            && self.intersection == self.disease_len
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Composite score of `query` against `disease_tokens`
#[must_use]
pub fn score(query: &QueryTokens, disease_tokens: &FxHashSet<String>) -> f64 {
    SimilarityScore::compute(query, disease_tokens).composite()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> FxHashSet<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_perfect_match_scores_one() {
        let query = QueryTokens::parse("fever, cough, fatigue");
        let similarity = SimilarityScore::compute(&query, &set(&["fever", "cough", "fatigue"]));

        assert!(similarity.is_exact());
        assert_eq!(similarity.composite(), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // Q = {fever, cough}, D = {fever, cough, fatigue}
        let query = QueryTokens::parse("fever, cough");
        let similarity = SimilarityScore::compute(&query, &set(&["fever", "cough", "fatigue"]));

        assert_eq!(similarity.intersection, 2);
        assert!(approx(similarity.jaccard, 2.0 / 3.0));
        assert!(approx(similarity.coverage, 1.0));
        assert!(approx(similarity.precision, 2.0 / 3.0));
        assert!(approx(similarity.composite(), 0.4 * 2.0 / 3.0 + 0.4 + 0.2 * 2.0 / 3.0));
        assert!(!similarity.is_exact());
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let query = QueryTokens::parse("rash");
        assert_eq!(score(&query, &set(&["fever", "cough"])), 0.0);
    }

    #[test]
    fn test_empty_disease_set() {
        let query = QueryTokens::parse("fever");
        let similarity = SimilarityScore::compute(&query, &FxHashSet::default());
        assert_eq!(similarity.composite(), 0.0);
        assert!(!similarity.is_exact());
    }

    #[test]
    fn test_empty_query_is_never_exact() {
        let similarity = SimilarityScore::from_counts(0, 0, 0);
        assert_eq!(similarity.composite(), 0.0);
        assert!(!similarity.is_exact());
    }

    #[test]
    fn test_intersection_capped_at_smaller_set() {
        let similarity = SimilarityScore::from_counts(3, 1, 1);

        assert_eq!(similarity, SimilarityScore::from_counts(1, 1, 1));
        assert_eq!(similarity.intersection, 1);
        assert!(similarity.is_exact());
        assert_eq!(similarity.composite(), 1.0);
    }

    #[test]
    fn test_score_bounds() {
        for query_len in 1..6 {
            for disease_len in 0..6 {
                for intersection in 0..=query_len.min(disease_len) {
                    let s = SimilarityScore::from_counts(intersection, query_len, disease_len)
                        .composite();
                    assert!((0.0..=1.0).contains(&s), "score {s} out of bounds");
                }
            }
        }
    }
}
