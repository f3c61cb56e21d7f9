//! Calculation logic for the Grade Tracking Engine.
//!
//! This module contains all the pure calculation functions for deriving
//! grade estimates from the session's records: raw carry percentages,
//! current-grade projection, letter-grade mapping, required final-exam
//! marks, assignment completion rates, due-date deltas, weekly workload
//! aggregation and per-course statistics.

mod carry_percentage;
mod completion_rate;
mod course_stats;
mod current_grade;
mod due_dates;
mod exam_requirement;
mod grade_letter;
mod workload;

pub use carry_percentage::calculate_carry_percentage;
pub use completion_rate::calculate_completion_rate;
pub use course_stats::{CourseStatistics, course_statistics};
pub use current_grade::calculate_current_grade;
pub use due_dates::{calculate_days_until_due, days_until_due};
pub use exam_requirement::calculate_final_exam_requirement;
pub use grade_letter::{GradeLetter, get_grade_letter};
pub use workload::{WeeklyWorkload, get_weekly_workload};
