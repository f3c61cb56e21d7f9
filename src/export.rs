//! CSV export surface.
//!
//! Tabular session snapshots serialize to flat CSV with a header row taken
//! from the record field names, and download filenames embed the export
//! date as `YYYYMMDD`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calculation::CourseStatistics;
use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, CarryMarkEntry};

/// Builds the dated export filename for a snapshot.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use grade_engine::export::export_filename;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// assert_eq!(export_filename("carry_marks", date), "carry_marks_20260302.csv");
/// ```
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y%m%d"))
}

/// Serializes records to CSV with a header row.
///
/// An empty slice yields an empty string: there is no header to infer
/// without a record, and the dashboard only offers downloads for non-empty
/// tables.
fn to_csv<T: Serialize>(records: &[T]) -> EngineResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| EngineError::ExportError {
                message: e.to_string(),
            })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

/// Serializes carry-mark entries to CSV.
pub fn carry_marks_csv(carry_marks: &[CarryMarkEntry]) -> EngineResult<String> {
    to_csv(carry_marks)
}

/// Serializes assignments to CSV.
pub fn assignments_csv(assignments: &[Assignment]) -> EngineResult<String> {
    to_csv(assignments)
}

/// Serializes course statistics to CSV.
pub fn course_statistics_csv(statistics: &[CourseStatistics]) -> EngineResult<String> {
    to_csv(statistics)
}
