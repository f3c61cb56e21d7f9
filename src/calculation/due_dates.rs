//! Due-date deltas.
//!
//! This module parses assignment due dates and computes how many days remain
//! until (or have passed since) the deadline.

use chrono::{Local, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// The date format assignments use for due dates.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calculates the signed day delta from `today` to a `YYYY-MM-DD` due date.
///
/// Negative results mean the date is already past.
///
/// # Errors
///
/// Returns [`EngineError::DateParseError`] when the input does not match the
/// expected format.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use grade_engine::calculation::days_until_due;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// assert_eq!(days_until_due("2026-03-07", today).unwrap(), 5);
/// assert_eq!(days_until_due("2026-02-28", today).unwrap(), -2);
/// assert!(days_until_due("next week", today).is_err());
/// ```
pub fn days_until_due(due_date: &str, today: NaiveDate) -> EngineResult<i64> {
    let due =
        NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT).map_err(|e| {
            EngineError::DateParseError {
                input: due_date.to_string(),
                message: e.to_string(),
            }
        })?;

    Ok((due - today).num_days())
}

/// Neutral-default wrapper around [`days_until_due`].
///
/// Evaluates against the current local date and returns 0 when the input
/// fails to parse, so "due today" and "unparseable" are indistinguishable.
/// Callers that need to tell them apart should use the strict variant.
pub fn calculate_days_until_due(due_date: &str) -> i64 {
    days_until_due(due_date, Local::now().date_naive()).unwrap_or(0)
}
