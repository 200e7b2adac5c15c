//! Parallel scoring implementation
//!
//! Scoring is a pure function of (query, record), so records are scored
//! independently across the rayon pool. The indexed parallel iterator keeps
//! the output in catalog order.

use log::debug;
use rayon::prelude::*;

use crate::algorithm::matching::tokens::QueryTokens;
use crate::algorithm::matching::types::ScoredRecord;
use crate::catalog::DiseaseRecord;

/// Score every record using the rayon thread pool
#[must_use]
pub fn score_parallel<'a>(records: &'a [DiseaseRecord], query: &QueryTokens) -> Vec<ScoredRecord<'a>> {
    debug!(
        "Scoring {} records in parallel with {} threads",
        records.len(),
        rayon::current_num_threads()
    );
    records
        .par_iter()
        .map(|record| ScoredRecord::new(record, query))
        .collect()
}
