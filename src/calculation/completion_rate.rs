//! Assignment completion rate.

use crate::models::Assignment;

/// Calculates the percentage of assignments marked completed.
///
/// Returns 0 for an empty slice rather than NaN.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::calculate_completion_rate;
///
/// assert_eq!(calculate_completion_rate(&[]), 0.0);
/// ```
pub fn calculate_completion_rate(assignments: &[Assignment]) -> f64 {
    if assignments.is_empty() {
        return 0.0;
    }

    let completed = assignments
        .iter()
        .filter(|a| a.status.is_completed())
        .count();

    completed as f64 / assignments.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssignmentStatus;

    fn make_assignment(status: AssignmentStatus) -> Assignment {
        Assignment {
            title: "Worksheet".to_string(),
            course_code: "BUM 2123".to_string(),
            kind: "Homework".to_string(),
            due_date: "2026-03-20".to_string(),
            status,
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_input_returns_zero() {
        assert_eq!(calculate_completion_rate(&[]), 0.0);
    }

    #[test]
    fn test_half_completed() {
        let assignments = vec![
            make_assignment(AssignmentStatus::Completed),
            make_assignment(AssignmentStatus::Completed),
            make_assignment(AssignmentStatus::Pending),
            make_assignment(AssignmentStatus::Pending),
        ];
        assert_eq!(calculate_completion_rate(&assignments), 50.0);
    }

    #[test]
    fn test_all_completed() {
        let assignments = vec![make_assignment(AssignmentStatus::Completed)];
        assert_eq!(calculate_completion_rate(&assignments), 100.0);
    }

    #[test]
    fn test_none_completed() {
        let assignments = vec![
            make_assignment(AssignmentStatus::Pending),
            make_assignment(AssignmentStatus::Pending),
        ];
        assert_eq!(calculate_completion_rate(&assignments), 0.0);
    }
}
