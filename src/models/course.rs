//! Course model.
//!
//! This module defines the Course struct representing a single enrolled
//! course and its assessment weight split.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tolerance used when checking that the weight split sums to 100.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Represents an enrolled course.
///
/// The course code acts as the primary key for the session: carry marks,
/// assignments and final-exam plans all reference it. The final grade is
/// split between continuous assessment (`carry_weight`) and the final exam
/// (`exam_weight`); the two must sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g., "BSD 1323").
    pub code: String,
    /// Human-readable course name.
    pub name: String,
    /// Percentage of the final grade from continuous assessment (0-100).
    pub carry_weight: f64,
    /// Percentage of the final grade from the final exam (0-100).
    pub exam_weight: f64,
}

impl Course {
    /// Creates a course, validating the weight split.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCourseWeights`] if `carry_weight` and
    /// `exam_weight` do not sum to 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use grade_engine::models::Course;
    ///
    /// let course = Course::new("BSD 1323", "Storytelling & Data Visualization", 60.0, 40.0).unwrap();
    /// assert_eq!(course.carry_weight, 60.0);
    ///
    /// assert!(Course::new("BAD 0000", "Broken Split", 70.0, 40.0).is_err());
    /// ```
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        carry_weight: f64,
        exam_weight: f64,
    ) -> EngineResult<Self> {
        let code = code.into();
        if (carry_weight + exam_weight - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::InvalidCourseWeights {
                code,
                carry_weight,
                exam_weight,
            });
        }
        Ok(Self {
            code,
            name: name.into(),
            carry_weight,
            exam_weight,
        })
    }
}
