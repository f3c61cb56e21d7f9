//! Carry mark model.
//!
//! This module defines the CarryMarkEntry struct representing one graded
//! continuous-assessment component (quiz, lab, test, etc.) of a course.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single graded carry-mark component.
///
/// Each entry records the raw marks earned out of a maximum, the share of
/// the course's total weight the component carries, and optionally the
/// pre-weighted contribution toward the course's 0-100 grade scale.
///
/// `final_contribution` is the weighted point value this entry adds to the
/// course's overall grade. Populating it for any entry of a course commits
/// that course's data to the weighted-contribution interpretation used by
/// [`calculate_current_grade`](crate::calculation::calculate_current_grade).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarryMarkEntry {
    /// Code of the course this entry belongs to.
    pub course_code: String,
    /// Component category (e.g., "Quiz", "Lab", "Test").
    pub element_type: String,
    /// Component name (e.g., "Quiz 1").
    pub element_name: String,
    /// Marks earned.
    pub earned: f64,
    /// Maximum marks available for the component (expected > 0).
    pub max_possible: f64,
    /// Share of the course's total weight this component carries (0-100).
    pub weight_percentage: f64,
    /// Pre-weighted contribution toward the course's overall grade, if the
    /// caller computed one at entry time.
    pub final_contribution: Option<f64>,
    /// Date the entry was recorded. Stamped by the session store at insert.
    pub date_added: NaiveDate,
}

impl CarryMarkEntry {
    /// Returns this entry's raw performance as a percentage.
    ///
    /// Guards against a zero or negative maximum by returning 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
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
    /// assert_eq!(entry.percentage(), 80.0);
    /// ```
    pub fn percentage(&self) -> f64 {
        if self.max_possible <= 0.0 {
            return 0.0;
        }
        self.earned / self.max_possible * 100.0
    }
}
