//! Symptom checker service facade
//!
//! [`SymptomChecker`] pairs a loaded catalog with its configuration and
//! answers symptom queries. [`shared_catalog`] and [`predict_diseases`]
//! provide the process-wide catalog:
//!
//! * initialised lazily, once, on first use;
//! * never torn down and never reloaded for the life of the process;
//! * a failed load leaves it uninitialised, so the next call retries.

use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use log::{debug, info};
use serde::Serialize;

use crate::algorithm::matching::{MatchResult, QueryTokens, SymptomMatcher};
use crate::catalog::SymptomCatalog;
use crate::config::SymptomCheckerConfig;
use crate::error::Result;

static SHARED_CATALOG: OnceLock<Arc<SymptomCatalog>> = OnceLock::new();
static SHARED_CATALOG_INIT: Mutex<()> = Mutex::new(());

/// The process-wide catalog, loading it from `path` on first use
///
/// Later calls return the already loaded catalog regardless of `path`.
pub fn shared_catalog(path: &Path) -> Result<Arc<SymptomCatalog>> {
    if let Some(catalog) = SHARED_CATALOG.get() {
        return Ok(Arc::clone(catalog));
    }

    let _guard = SHARED_CATALOG_INIT
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    // Another caller may have finished loading while we waited.
    if let Some(catalog) = SHARED_CATALOG.get() {
        return Ok(Arc::clone(catalog));
    }

    let catalog = Arc::new(SymptomCatalog::load(path)?);
    info!("Initialised shared symptom catalog from {}", path.display());
    Ok(Arc::clone(SHARED_CATALOG.get_or_init(|| catalog)))
}

/// Rank diseases for `symptoms` using the shared catalog
///
/// The catalog location and parallel threshold come from
/// [`SymptomCheckerConfig::from_env`].
pub fn predict_diseases(symptoms: &str, top_n: usize, min_score: f64) -> Result<Vec<MatchResult>> {
    let config = SymptomCheckerConfig::from_env();
    let catalog = shared_catalog(&config.catalog_path)?;
    Ok(SymptomMatcher::new(&catalog)
        .with_parallel_threshold(config.parallel_threshold)
        .predict(symptoms, top_n, min_score))
}

/// How a query turned out, for callers that need to tell the cases apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The query held no symptoms; nothing was scored
    EmptyInput,
    /// Symptoms were given but no disease qualified
    NoMatches,
    /// At least one disease qualified
    Matches,
}

/// Non-fatal cautions attached to an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advisory {
    /// Only one symptom was given; results may be broad
    SingleSymptom,
}

impl Advisory {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SingleSymptom => {
                "Only one symptom was provided; results may be broad. Add more symptoms for a more specific match."
            }
        }
    }
}

/// The parsed query together with its ranked results
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub query: QueryTokens,
    pub results: Vec<MatchResult>,
}

impl Assessment {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.query.is_empty() {
            Outcome::EmptyInput
        } else if self.results.is_empty() {
            Outcome::NoMatches
        } else {
            Outcome::Matches
        }
    }

    #[must_use]
    pub fn advisory(&self) -> Option<Advisory> {
        self.query.is_single_symptom().then_some(Advisory::SingleSymptom)
    }

    /// Whether the exact-match override produced these results
    #[must_use]
    pub fn has_exact_match(&self) -> bool {
        self.results.iter().any(|r| r.exact)
    }
}

/// Symptom checker bound to one catalog
#[derive(Debug, Clone)]
pub struct SymptomChecker {
    catalog: Arc<SymptomCatalog>,
    config: SymptomCheckerConfig,
}

impl SymptomChecker {
    /// Create a checker over an already loaded catalog
    #[must_use]
    pub fn new(catalog: Arc<SymptomCatalog>, config: SymptomCheckerConfig) -> Self {
        Self { catalog, config }
    }

    /// Load the catalog named by `config` and create a checker over it
    pub fn from_config(config: SymptomCheckerConfig) -> Result<Self> {
        debug!("{}", config.to_string_representation());
        let catalog = SymptomCatalog::load(&config.catalog_path)?;
        Ok(Self::new(Arc::new(catalog), config))
    }

    #[must_use]
    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &SymptomCheckerConfig {
        &self.config
    }

    fn matcher(&self) -> SymptomMatcher<'_> {
        SymptomMatcher::new(&self.catalog).with_parallel_threshold(self.config.parallel_threshold)
    }

    /// Rank diseases for `symptoms` with explicit limits
    #[must_use]
    pub fn predict(&self, symptoms: &str, top_n: usize, min_score: f64) -> Vec<MatchResult> {
        self.matcher().predict(symptoms, top_n, min_score)
    }

    /// Assess `symptoms` using the configured `top_n` and `min_score`
    #[must_use]
    pub fn assess(&self, symptoms: &str) -> Assessment {
        self.assess_with(symptoms, self.config.top_n, self.config.min_score)
    }

    /// Assess `symptoms` with explicit limits
    #[must_use]
    pub fn assess_with(&self, symptoms: &str, top_n: usize, min_score: f64) -> Assessment {
        let query = QueryTokens::parse(symptoms);
        let results = self.matcher().predict_tokens(&query, top_n, min_score);
        Assessment { query, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> SymptomChecker {
        let catalog = SymptomCatalog::from_records(vec![
            ("Flu", vec!["fever", "cough", "fatigue"]),
            ("Cold", vec!["cough", "sneezing"]),
        ]);
        SymptomChecker::new(Arc::new(catalog), SymptomCheckerConfig::default())
    }

    #[test]
    fn test_outcomes_are_distinguished() {
        let checker = checker();

        assert_eq!(checker.assess("  ").outcome(), Outcome::EmptyInput);
        assert_eq!(checker.assess("rash").outcome(), Outcome::NoMatches);
        assert_eq!(checker.assess("fever, cough").outcome(), Outcome::Matches);
    }

    #[test]
    fn test_single_symptom_advisory() {
        let checker = checker();

        assert_eq!(checker.assess("cough").advisory(), Some(Advisory::SingleSymptom));
        assert_eq!(checker.assess("cough, fever").advisory(), None);
        assert_eq!(checker.assess("").advisory(), None);
    }

    #[test]
    fn test_exact_match_flag() {
        let checker = checker();

        assert!(checker.assess("cough, sneezing").has_exact_match());
        assert!(!checker.assess("cough").has_exact_match());
    }
}
