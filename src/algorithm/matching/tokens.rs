//! Symptom token normalisation and query parsing
//!
//! Catalog column names and user-supplied symptoms pass through the same
//! [`normalize_token`] so both sides share one vocabulary.

use std::collections::BTreeSet;

use itertools::Itertools;

/// Normalise a symptom or disease name to its canonical token form
///
/// Trims surrounding whitespace, lower-cases, and replaces spaces and
/// hyphens with underscores: `" Shortness of-Breath "` becomes
/// `"shortness_of_breath"`.
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// The normalised, de-duplicated set of symptoms in a query
///
/// Iteration is in sorted order, which keeps everything derived from a
/// query (matched tokens, rendered output) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTokens {
    tokens: BTreeSet<String>,
}

impl QueryTokens {
    /// Parse a comma-separated symptom string
    ///
    /// Empty fragments (including whitespace-only ones) are discarded, so
    /// `""`, `"   "` and `", ,"` all produce an empty query.
    #[must_use]
    pub fn parse(symptoms: &str) -> Self {
        let tokens = symptoms
            .split(',')
            .map(normalize_token)
            .filter(|token| !token.is_empty())
            .collect();
        Self { tokens }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Single-symptom queries are valid but tend to match broadly
    #[must_use]
    pub fn is_single_symptom(&self) -> bool {
        self.tokens.len() == 1
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Comma-joined canonical form, e.g. `"cough, fever"`
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.tokens.iter().join(", ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for QueryTokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let tokens = iter
            .into_iter()
            .map(|s| normalize_token(s.as_ref()))
            .filter(|token| !token.is_empty())
            .collect();
        Self { tokens }
    }
}
