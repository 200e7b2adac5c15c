//! Configuration for the symptom checker.

use std::path::{Path, PathBuf};

use crate::error::{Result, SymptomCheckerError};

/// Environment variable overriding the catalog location
pub const ENV_CATALOG_PATH: &str = "SYMPTOM_CATALOG_PATH";
/// Environment variable overriding the number of results
pub const ENV_TOP_N: &str = "SYMPTOM_TOP_N";
/// Environment variable overriding the minimum score
pub const ENV_MIN_SCORE: &str = "SYMPTOM_MIN_SCORE";
/// Environment variable overriding the parallel scoring threshold
pub const ENV_PARALLEL_THRESHOLD: &str = "SYMPTOM_PARALLEL_THRESHOLD";

/// Default location of the disease/symptom table
pub const DEFAULT_CATALOG_PATH: &str = "data/disease_symptom.csv";

/// Configuration for the `SymptomChecker`
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomCheckerConfig {
    /// Path to the disease/symptom table (.csv or .parquet)
    pub catalog_path: PathBuf,
    /// Maximum number of non-exact results returned per query
    pub top_n: usize,
    /// Candidates scoring below this are discarded
    pub min_score: f64,
    /// Catalog size at which scoring switches to rayon
    pub parallel_threshold: usize,
    /// Maximum number of non-exact results shown in a rendered report
    pub display_limit: usize,
}

impl Default for SymptomCheckerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            top_n: 5,
            min_score: 0.0,
            parallel_threshold: 512,
            display_limit: 3,
        }
    }
}

impl SymptomCheckerConfig {
    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> SymptomCheckerConfigBuilder {
        SymptomCheckerConfigBuilder::new()
    }

    /// Default configuration with environment overrides applied
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names
    ///
    /// Values that fail to parse (or fail validation) are logged and ignored,
    /// leaving the current value in place.
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG_PATH).filter(|p| !p.trim().is_empty()) {
            self.catalog_path = PathBuf::from(path.trim());
        }

        if let Some(raw) = lookup(ENV_TOP_N) {
            match raw.trim().parse::<usize>() {
                Ok(top_n) => self.top_n = top_n,
                Err(e) => log::warn!("Ignoring {ENV_TOP_N}={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_MIN_SCORE) {
            match raw.trim().parse::<f64>() {
                Ok(score) if validate_min_score(score).is_ok() => self.min_score = score,
                Ok(score) => log::warn!("Ignoring {ENV_MIN_SCORE}={score}: must be within [0, 1]"),
                Err(e) => log::warn!("Ignoring {ENV_MIN_SCORE}={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_PARALLEL_THRESHOLD) {
            match raw.trim().parse::<usize>() {
                Ok(threshold) => self.parallel_threshold = threshold,
                Err(e) => log::warn!("Ignoring {ENV_PARALLEL_THRESHOLD}={raw:?}: {e}"),
            }
        }

        self
    }

    /// Human-readable summary, used when logging startup settings
    #[must_use]
    pub fn to_string_representation(&self) -> String {
        format!(
            "Symptom checker configuration:\n\
             - Catalog: {}\n\
             - Top N: {}\n\
             - Minimum score: {:.2}\n\
             - Parallel threshold: {} records\n\
             - Display limit: {}",
            self.catalog_path.display(),
            self.top_n,
            self.min_score,
            self.parallel_threshold,
            self.display_limit
        )
    }
}

fn validate_min_score(min_score: f64) -> Result<()> {
    if !min_score.is_finite() || !(0.0..=1.0).contains(&min_score) {
        return Err(SymptomCheckerError::Config(format!(
            "min_score must be a finite value within [0, 1], got {min_score}"
        )));
    }
    Ok(())
}

/// Builder for constructing a `SymptomCheckerConfig`
#[derive(Debug, Clone, Default)]
pub struct SymptomCheckerConfigBuilder {
    config: SymptomCheckerConfig,
}

impl SymptomCheckerConfigBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn catalog_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.catalog_path = path.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.config.top_n = top_n;
        self
    }

    #[must_use]
    pub fn min_score(mut self, min_score: f64) -> Self {
        self.config.min_score = min_score;
        self
    }

    #[must_use]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    #[must_use]
    pub fn display_limit(mut self, limit: usize) -> Self {
        self.config.display_limit = limit;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<SymptomCheckerConfig> {
        validate_min_score(self.config.min_score)?;
        if self.config.display_limit == 0 {
            return Err(SymptomCheckerError::Config(
                "display_limit must be at least 1".to_string(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_builder_rejects_out_of_range_min_score() {
        assert!(SymptomCheckerConfig::builder().min_score(1.5).build().is_err());
        assert!(SymptomCheckerConfig::builder().min_score(-0.1).build().is_err());
        assert!(SymptomCheckerConfig::builder().min_score(f64::NAN).build().is_err());
        assert!(SymptomCheckerConfig::builder().min_score(0.25).build().is_ok());
    }

    #[test]
    fn test_builder_rejects_zero_display_limit() {
        assert!(SymptomCheckerConfig::builder().display_limit(0).build().is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let config = SymptomCheckerConfig::default().with_overrides_from(lookup_from(&[
            (ENV_CATALOG_PATH, "/srv/catalog.parquet"),
            (ENV_TOP_N, "10"),
            (ENV_MIN_SCORE, "0.3"),
            (ENV_PARALLEL_THRESHOLD, "64"),
        ]));

        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.parquet"));
        assert_eq!(config.top_n, 10);
        assert!((config.min_score - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.parallel_threshold, 64);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let config = SymptomCheckerConfig::default().with_overrides_from(lookup_from(&[
            (ENV_TOP_N, "many"),
            (ENV_MIN_SCORE, "2.0"),
            (ENV_CATALOG_PATH, "   "),
        ]));

        assert_eq!(config, SymptomCheckerConfig::default());
    }
}
