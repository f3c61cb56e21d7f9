//! Final exam planning record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A final-exam plan for a course.
///
/// The engine treats these records as opaque apart from the course key: they
/// participate in the store's cascading delete, and callers feed
/// `target_grade` into
/// [`calculate_final_exam_requirement`](crate::calculation::calculate_final_exam_requirement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalExamEntry {
    /// Code of the course the exam belongs to.
    pub course_code: String,
    /// Scheduled exam date, if known.
    pub exam_date: Option<NaiveDate>,
    /// The overall grade (0-100) the student is aiming for.
    pub target_grade: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_round_trip() {
        let entry = FinalExamEntry {
            course_code: "BUM 2413".to_string(),
            exam_date: NaiveDate::from_ymd_opt(2026, 6, 15),
            target_grade: Some(75.0),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: FinalExamEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
