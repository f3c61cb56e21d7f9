//! Assignment model and status enum.
//!
//! This module defines the Assignment struct for tracked coursework and the
//! AssignmentStatus enum for its lifecycle.

use serde::{Deserialize, Serialize};

/// The completion status of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Not yet completed.
    Pending,
    /// Marked done by the student.
    Completed,
}

impl AssignmentStatus {
    /// Returns true for [`AssignmentStatus::Completed`].
    pub fn is_completed(self) -> bool {
        matches!(self, AssignmentStatus::Completed)
    }

    /// Returns true for [`AssignmentStatus::Pending`].
    pub fn is_pending(self) -> bool {
        matches!(self, AssignmentStatus::Pending)
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Pending => write!(f, "pending"),
            AssignmentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Represents a tracked assignment.
///
/// The due date is kept as the raw `YYYY-MM-DD` string the student entered;
/// parsing happens in the calculation layer so that a malformed date cannot
/// invalidate the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment title.
    pub title: String,
    /// Code of the course this assignment belongs to.
    pub course_code: String,
    /// Assignment category (e.g., "Report", "Presentation").
    #[serde(rename = "type")]
    pub kind: String,
    /// Due date in `YYYY-MM-DD` format.
    pub due_date: String,
    /// Completion status.
    pub status: AssignmentStatus,
    /// Free-form description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(AssignmentStatus::Completed.is_completed());
        assert!(!AssignmentStatus::Completed.is_pending());
        assert!(AssignmentStatus::Pending.is_pending());
        assert!(!AssignmentStatus::Pending.is_completed());
    }

    #[test]
    fn test_status_display_is_snake_case() {
        assert_eq!(AssignmentStatus::Pending.to_string(), "pending");
        assert_eq!(AssignmentStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let assignment = Assignment {
            title: "Dashboard mockup".to_string(),
            course_code: "BSD 1323".to_string(),
            kind: "Report".to_string(),
            due_date: "2026-03-20".to_string(),
            status: AssignmentStatus::Pending,
            description: "Sketch the final dashboard layout".to_string(),
        };

        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(json["type"], "Report");
        assert_eq!(json["status"], "pending");

        let deserialized: Assignment = serde_json::from_value(json).unwrap();
        assert_eq!(assignment, deserialized);
    }
}
