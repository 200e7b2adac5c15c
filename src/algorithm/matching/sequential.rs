//! Sequential scoring for small catalogs

use log::debug;

use crate::algorithm::matching::tokens::QueryTokens;
use crate::algorithm::matching::types::ScoredRecord;
use crate::catalog::DiseaseRecord;

/// Score every record in order on the calling thread
#[must_use]
pub fn score_sequential<'a>(records: &'a [DiseaseRecord], query: &QueryTokens) -> Vec<ScoredRecord<'a>> {
    debug!("Scoring {} records sequentially", records.len());
    records
        .iter()
        .map(|record| ScoredRecord::new(record, query))
        .collect()
}
