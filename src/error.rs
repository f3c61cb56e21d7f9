//! Error types for the Grade Tracking Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while tracking grades.

use thiserror::Error;

/// The main error type for the Grade Tracking Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use grade_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/courses.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/courses.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Course code was not found in the session store.
    #[error("Course not found: {code}")]
    CourseNotFound {
        /// The course code that was not found.
        code: String,
    },

    /// A course with the same code already exists in the session store.
    #[error("Course already exists: {code}")]
    DuplicateCourse {
        /// The course code that collided.
        code: String,
    },

    /// A course's carry and exam weights do not sum to 100.
    #[error("Invalid weights for course '{code}': carry {carry_weight} + exam {exam_weight} must sum to 100")]
    InvalidCourseWeights {
        /// The course code with the invalid split.
        code: String,
        /// The carry weight that was supplied.
        carry_weight: f64,
        /// The exam weight that was supplied.
        exam_weight: f64,
    },

    /// A mutation referenced an index outside the collection bounds.
    #[error("Index {index} out of range for {collection} (len {len})")]
    IndexOutOfRange {
        /// The collection that was indexed.
        collection: &'static str,
        /// The index that was requested.
        index: usize,
        /// The length of the collection at the time of the request.
        len: usize,
    },

    /// A date string did not match the expected `YYYY-MM-DD` format.
    #[error("Failed to parse date '{input}': {message}")]
    DateParseError {
        /// The raw input that failed to parse.
        input: String,
        /// A description of the parse error.
        message: String,
    },

    /// A CSV export could not be produced.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
