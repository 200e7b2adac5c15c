//! Plain-text rendering of symptom assessments

use itertools::Itertools;

use crate::checker::{Advisory, Assessment, Outcome};

const SEPARATOR: &str = "\n\n---\n\n";

/// Turn a token into display text: `"shortness_of_breath"` -> `"Shortness Of Breath"`
#[must_use]
pub fn humanize_token(token: &str) -> String {
    token
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .join(" ")
}

/// Score as a whole percentage, truncated: 0.7333 -> 73
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).floor() as u32
}

/// Render an assessment as markdown-flavoured text
///
/// When any result is an exact match, every exact match is shown; otherwise
/// at most `display_limit` results are shown.
#[must_use]
pub fn render(assessment: &Assessment, display_limit: usize) -> String {
    match assessment.outcome() {
        Outcome::EmptyInput => return "No symptoms provided.".to_string(),
        Outcome::NoMatches => return "No matches found.".to_string(),
        Outcome::Matches => {}
    }

    let mut header = format!(
        "Possible conditions for: {}",
        assessment.query.iter().map(humanize_token).join(", ")
    );
    if let Some(advisory) = assessment.advisory() {
        header.push_str("\n\n");
        header.push_str(advisory.message());
    }

    let shown = if assessment.has_exact_match() {
        assessment.results.iter().filter(|r| r.exact).collect_vec()
    } else {
        assessment.results.iter().take(display_limit).collect_vec()
    };

    std::iter::once(header)
        .chain(shown.into_iter().map(|result| {
            format!(
                "#### {}\nMatch Score: {}%\nMatched: {}",
                result.label,
                score_percent(result.score),
                result.matched_tokens.iter().map(|t| humanize_token(t)).join(", ")
            )
        }))
        .join(SEPARATOR)
}

/// Caution text for the advisory attached to `assessment`, if any
#[must_use]
pub fn advisory_text(assessment: &Assessment) -> Option<&'static str> {
    assessment.advisory().map(Advisory::message)
}
