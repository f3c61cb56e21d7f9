//! Raw carry percentage calculation.
//!
//! This module computes a course's continuous-assessment performance as a
//! plain points-earned over points-available percentage.

use crate::models::CarryMarkEntry;

/// Calculates the raw carry percentage for a course.
///
/// Sums `earned` and `max_possible` across the entries matching
/// `course_code` and returns `100 * earned / max_possible`.
///
/// The result is NOT weight-adjusted: it measures performance on the work
/// graded so far, independent of how much of the course's total weight that
/// work represents. Use
/// [`calculate_current_grade`](super::calculate_current_grade) for the
/// weighted 0-100-scale contribution.
///
/// # Arguments
///
/// * `course_code` - The course to filter entries by
/// * `carry_marks` - All carry-mark entries in the session
///
/// # Returns
///
/// The percentage of available points earned, or 0 when there are no
/// matching entries or the matching entries have no available points.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use grade_engine::calculation::calculate_carry_percentage;
/// use grade_engine::models::CarryMarkEntry;
///
/// let entry = CarryMarkEntry {
///     course_code: "BSD 1323".to_string(),
///     element_type: "Quiz".to_string(),
///     element_name: "Quiz 1".to_string(),
///     earned: 8.0,
///     max_possible: 10.0,
///     weight_percentage: 5.0,
///     final_contribution: None,
///     date_added: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
/// };
/// assert_eq!(calculate_carry_percentage("BSD 1323", &[entry]), 80.0);
/// assert_eq!(calculate_carry_percentage("BSD 1323", &[]), 0.0);
/// ```
pub fn calculate_carry_percentage(course_code: &str, carry_marks: &[CarryMarkEntry]) -> f64 {
    let mut total_earned = 0.0;
    let mut total_max = 0.0;

    for entry in carry_marks.iter().filter(|e| e.course_code == course_code) {
        total_earned += entry.earned;
        total_max += entry.max_possible;
    }

    if total_max == 0.0 {
        return 0.0;
    }

    total_earned / total_max * 100.0
}
