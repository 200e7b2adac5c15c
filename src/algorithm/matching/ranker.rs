//! Ranking and de-duplication of scored records
//!
//! 1. Drop records scoring below `min_score`.
//! 2. Stable sort by score, descending; equal scores keep catalog order.
//! 3. Keep the first (best) row per disease name.
//! 4. If any survivor is an exact match, return every exact match and
//!    ignore `top_n`. Otherwise take the first `top_n` and drop those sharing
//!    no symptom with the query.

use log::debug;
use rustc_hash::FxHashSet;

use crate::algorithm::matching::tokens::QueryTokens;
use crate::algorithm::matching::types::{MatchResult, ScoredRecord};

/// Rank scored records into the final result list
///
/// An empty result means "no matches".
#[must_use]
pub fn rank(
    mut scored: Vec<ScoredRecord<'_>>,
    query: &QueryTokens,
    top_n: usize,
    min_score: f64,
) -> Vec<MatchResult> {
    scored.retain(|s| s.score >= min_score);

    // `sort_by` is stable, which preserves catalog order on ties.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen = FxHashSet::default();
    let unique: Vec<ScoredRecord<'_>> = scored
        .into_iter()
        .filter(|s| seen.insert(s.record.name()))
        .collect();

    let has_exact = unique.iter().any(|s| s.similarity.is_exact());

    let ranked: Vec<MatchResult> = if has_exact {
        unique
            .iter()
            .filter(|s| s.similarity.is_exact())
            .map(|s| MatchResult::from_scored(s, query))
            .collect()
    } else {
        unique
            .iter()
            .take(top_n)
            .filter(|s| s.similarity.intersection > 0)
            .map(|s| MatchResult::from_scored(s, query))
            .collect()
    };

    debug!(
        "Ranked {} unique candidates into {} results (exact match override: {})",
        unique.len(),
        ranked.len(),
        has_exact
    );

    ranked
}
