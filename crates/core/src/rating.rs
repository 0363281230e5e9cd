//! Rating-score domain rules.
//!
//! The storage layer repeats the range check as a CHECK constraint;
//! the authoritative validation lives here.

use crate::error::CoreError;

/// Lowest accepted rating score, inclusive.
pub const MIN_SCORE: i32 = 1;

/// Highest accepted rating score, inclusive.
pub const MAX_SCORE: i32 = 10;

/// Validate a rating score against the closed range `[MIN_SCORE, MAX_SCORE]`.
pub fn validate_score(score: i32) -> Result<(), CoreError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CoreError::InvalidValue(format!(
            "score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )));
    }
    Ok(())
}

/// Arithmetic mean of the given scores, rounded to one decimal place.
///
/// `None` when there are no scores. An average of zero is impossible
/// since scores start at 1, so callers can distinguish "no ratings"
/// from any real aggregate.
pub fn average(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }

    let total: i64 = scores.iter().map(|s| i64::from(*s)).sum();
    let mean = total as f64 / scores.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
