//! Weekly workload aggregation.
//!
//! This module groups assignments by the ISO calendar week of their due date
//! so the dashboard can chart how crowded each week is.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::Assignment;

/// One week's assignment workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyWorkload {
    /// The Monday of the ISO week.
    pub week_start: NaiveDate,
    /// Number of assignments due in the week.
    pub total_assignments: usize,
    /// Number of those assignments still pending.
    pub pending_assignments: usize,
}

/// Groups assignments by the ISO calendar week of their due date.
///
/// Each entry reports the week's Monday, the total number of assignments
/// due that week, and how many of them are still pending. Weeks are sorted
/// ascending. Assignments whose due date fails to parse are skipped.
///
/// Returns an empty vector for empty input.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::get_weekly_workload;
///
/// assert!(get_weekly_workload(&[]).is_empty());
/// ```
pub fn get_weekly_workload(assignments: &[Assignment]) -> Vec<WeeklyWorkload> {
    let mut weeks: HashMap<NaiveDate, (usize, usize)> = HashMap::new();

    for assignment in assignments {
        let Ok(due) = NaiveDate::parse_from_str(&assignment.due_date, "%Y-%m-%d") else {
            continue;
        };
        let iso = due.iso_week();
        let Some(week_start) = NaiveDate::from_isoywd_opt(iso.year(), iso.week(), Weekday::Mon)
        else {
            continue;
        };

        let entry = weeks.entry(week_start).or_insert((0, 0));
        entry.0 += 1;
        if assignment.status.is_pending() {
            entry.1 += 1;
        }
    }

    let mut workload: Vec<WeeklyWorkload> = weeks
        .into_iter()
        .map(|(week_start, (total, pending))| WeeklyWorkload {
            week_start,
            total_assignments: total,
            pending_assignments: pending,
        })
        .collect();

    workload.sort_by_key(|w| w.week_start);
    workload
}
