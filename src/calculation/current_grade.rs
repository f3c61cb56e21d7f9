//! Current grade projection.
//!
//! This module computes a course's current grade on the 0-100 overall scale
//! from whatever carry-mark data has been entered so far.

use crate::models::{CarryMarkEntry, Course};

use super::carry_percentage::calculate_carry_percentage;

/// Calculates the current grade for a course on its 0-100 overall scale.
///
/// Two mutually exclusive data interpretations are supported:
///
/// 1. **Weighted contributions** - if any entry for the course carries a
///    populated `final_contribution`, the result is the sum of the populated
///    contributions. Entries still missing the field contribute nothing;
///    populating the field for one entry commits the course's data to this
///    interpretation.
/// 2. **Raw-percentage fallback** - when no entry carries a contribution,
///    the result is `calculate_carry_percentage(..) * carry_weight / 100`.
///
/// # Arguments
///
/// * `course_code` - The course to project
/// * `carry_marks` - All carry-mark entries in the session
/// * `courses` - All courses in the session (for the weight fallback)
///
/// # Returns
///
/// The current grade contribution on the 0-100 scale, or 0 when the course
/// is unknown or has no carry-mark entries.
pub fn calculate_current_grade(
    course_code: &str,
    carry_marks: &[CarryMarkEntry],
    courses: &[Course],
) -> f64 {
    let Some(course) = courses.iter().find(|c| c.code == course_code) else {
        return 0.0;
    };

    let course_marks: Vec<&CarryMarkEntry> = carry_marks
        .iter()
        .filter(|e| e.course_code == course_code)
        .collect();
    if course_marks.is_empty() {
        return 0.0;
    }

    // Weighted-contribution path wins as soon as any entry is populated.
    if course_marks.iter().any(|e| e.final_contribution.is_some()) {
        return course_marks
            .iter()
            .filter_map(|e| e.final_contribution)
            .sum();
    }

    calculate_carry_percentage(course_code, carry_marks) * course.carry_weight / 100.0
}
