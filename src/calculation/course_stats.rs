//! Per-course statistics aggregation.
//!
//! This module assembles the per-course summary rows behind the dashboard's
//! performance table and charts.

use serde::Serialize;

use crate::models::{Assignment, CarryMarkEntry, Course};

use super::carry_percentage::calculate_carry_percentage;
use super::current_grade::calculate_current_grade;
use super::grade_letter::{GradeLetter, get_grade_letter};

/// Summary statistics for a single course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseStatistics {
    /// Course code.
    pub course_code: String,
    /// Course name.
    pub course_name: String,
    /// Raw carry performance (points earned over points available).
    pub carry_percentage: f64,
    /// Current grade contribution on the 0-100 overall scale.
    pub current_grade: f64,
    /// Projected letter grade, when there is enough data to project one.
    pub letter_grade: Option<GradeLetter>,
    /// Assignments recorded for the course.
    pub total_assignments: usize,
    /// Of those, how many are completed.
    pub completed_assignments: usize,
    /// The course's continuous-assessment weight.
    pub carry_weight: f64,
    /// The course's final-exam weight.
    pub exam_weight: f64,
}

/// Builds one [`CourseStatistics`] row per course.
///
/// The letter grade projects current performance onto the full grade scale:
/// with weighted-contribution data it grades
/// `current_grade / total_weight_entered * 100` (performance on the share of
/// the course graded so far); without contribution data it grades the raw
/// carry percentage. A course with no carry marks, or contribution data with
/// no weight entered yet, has no letter.
pub fn course_statistics(
    courses: &[Course],
    carry_marks: &[CarryMarkEntry],
    assignments: &[Assignment],
) -> Vec<CourseStatistics> {
    courses
        .iter()
        .map(|course| {
            let course_marks: Vec<&CarryMarkEntry> = carry_marks
                .iter()
                .filter(|e| e.course_code == course.code)
                .collect();

            let carry_percentage = calculate_carry_percentage(&course.code, carry_marks);
            let current_grade = calculate_current_grade(&course.code, carry_marks, courses);

            let letter_grade = if course_marks.is_empty() {
                None
            } else if course_marks.iter().any(|e| e.final_contribution.is_some()) {
                let total_weight_entered: f64 =
                    course_marks.iter().map(|e| e.weight_percentage).sum();
                if total_weight_entered > 0.0 {
                    Some(get_grade_letter(
                        current_grade / total_weight_entered * 100.0,
                    ))
                } else {
                    None
                }
            } else {
                Some(get_grade_letter(carry_percentage))
            };

            let total_assignments = assignments
                .iter()
                .filter(|a| a.course_code == course.code)
                .count();
            let completed_assignments = assignments
                .iter()
                .filter(|a| a.course_code == course.code && a.status.is_completed())
                .count();

            CourseStatistics {
                course_code: course.code.clone(),
                course_name: course.name.clone(),
                carry_percentage,
                current_grade,
                letter_grade,
                total_assignments,
                completed_assignments,
                carry_weight: course.carry_weight,
                exam_weight: course.exam_weight,
            }
        })
        .collect()
}
