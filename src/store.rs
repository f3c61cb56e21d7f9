//! In-memory session store.
//!
//! This module owns every record for the lifetime of an interactive session:
//! courses, carry marks, assignments and final-exam plans. All state is
//! discarded when the session ends; the only externalized form is the CSV
//! export surface in [`crate::export`].

use chrono::Local;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, AssignmentStatus, CarryMarkEntry, Course, FinalExamEntry};

/// Owns the session's record collections and their CRUD operations.
///
/// Collections are insertion-ordered. Mutations that address a record by
/// index return [`EngineError::IndexOutOfRange`] for a bad index and leave
/// the store untouched; callers that prefer the old dashboard's silent
/// no-op can discard the `Result`.
#[derive(Debug, Default)]
pub struct SessionStore {
    courses: Vec<Course>,
    carry_marks: Vec<CarryMarkEntry>,
    assignments: Vec<Assignment>,
    final_exams: Vec<FinalExamEntry>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the configured course catalog.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCourseWeights`] if a catalog entry has
    /// a weight split that does not sum to 100.
    pub fn with_catalog(config: &DashboardConfig) -> EngineResult<Self> {
        let mut store = Self::new();
        for seed in &config.courses {
            store.add_course(Course::new(
                seed.code.clone(),
                seed.name.clone(),
                seed.carry_weight,
                seed.exam_weight,
            )?)?;
        }
        debug!(courses = store.courses.len(), "session store seeded");
        Ok(store)
    }

    /// Returns the courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Returns the carry-mark entries in insertion order.
    pub fn carry_marks(&self) -> &[CarryMarkEntry] {
        &self.carry_marks
    }

    /// Returns the assignments in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns the final-exam plans in insertion order.
    pub fn final_exams(&self) -> &[FinalExamEntry] {
        &self.final_exams
    }

    /// Looks a course up by its code.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CourseNotFound`] for an unknown code.
    pub fn course_by_code(&self, code: &str) -> EngineResult<&Course> {
        self.courses
            .iter()
            .find(|c| c.code == code)
            .ok_or_else(|| EngineError::CourseNotFound {
                code: code.to_string(),
            })
    }

    /// Adds a course.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateCourse`] if a course with the same
    /// code is already present.
    pub fn add_course(&mut self, course: Course) -> EngineResult<()> {
        if self.courses.iter().any(|c| c.code == course.code) {
            return Err(EngineError::DuplicateCourse { code: course.code });
        }
        debug!(code = %course.code, "course added");
        self.courses.push(course);
        Ok(())
    }

    /// Replaces the course at `index`.
    ///
    /// Dependent records are keyed by course code and are not re-keyed when
    /// the replacement changes the code.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] for a bad index.
    pub fn update_course(&mut self, index: usize, course: Course) -> EngineResult<()> {
        let len = self.courses.len();
        let slot = self
            .courses
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange {
                collection: "courses",
                index,
                len,
            })?;
        debug!(code = %course.code, index, "course updated");
        *slot = course;
        Ok(())
    }

    /// Deletes the course at `index`, cascading to its dependents.
    ///
    /// Every carry mark, assignment and final-exam plan whose course code
    /// matches the deleted course is removed with it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] for a bad index; nothing is
    /// removed in that case.
    pub fn delete_course(&mut self, index: usize) -> EngineResult<Course> {
        if index >= self.courses.len() {
            return Err(EngineError::IndexOutOfRange {
                collection: "courses",
                index,
                len: self.courses.len(),
            });
        }

        let course = self.courses.remove(index);
        self.carry_marks.retain(|e| e.course_code != course.code);
        self.assignments.retain(|a| a.course_code != course.code);
        self.final_exams.retain(|f| f.course_code != course.code);
        debug!(code = %course.code, "course deleted with cascade");
        Ok(course)
    }

    /// Adds a carry-mark entry, stamping `date_added` with today's date.
    ///
    /// Any caller-supplied `date_added` is overwritten.
    pub fn add_carry_mark(&mut self, entry: CarryMarkEntry) {
        self.add_carry_mark_on(entry, Local::now().date_naive());
    }

    /// Adds a carry-mark entry with an explicit `date_added` stamp.
    pub fn add_carry_mark_on(&mut self, mut entry: CarryMarkEntry, date: chrono::NaiveDate) {
        entry.date_added = date;
        debug!(course = %entry.course_code, element = %entry.element_name, "carry mark added");
        self.carry_marks.push(entry);
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        debug!(course = %assignment.course_code, title = %assignment.title, "assignment added");
        self.assignments.push(assignment);
    }

    /// Updates the status of the assignment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] for a bad index.
    pub fn update_assignment_status(
        &mut self,
        index: usize,
        status: AssignmentStatus,
    ) -> EngineResult<()> {
        let len = self.assignments.len();
        let assignment = self
            .assignments
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange {
                collection: "assignments",
                index,
                len,
            })?;
        debug!(title = %assignment.title, %status, "assignment status updated");
        assignment.status = status;
        Ok(())
    }

    /// Deletes the assignment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] for a bad index.
    pub fn delete_assignment(&mut self, index: usize) -> EngineResult<Assignment> {
        if index >= self.assignments.len() {
            return Err(EngineError::IndexOutOfRange {
                collection: "assignments",
                index,
                len: self.assignments.len(),
            });
        }
        let assignment = self.assignments.remove(index);
        debug!(title = %assignment.title, "assignment deleted");
        Ok(assignment)
    }

    /// Adds a final-exam plan.
    pub fn add_final_exam(&mut self, entry: FinalExamEntry) {
        debug!(course = %entry.course_code, "final exam plan added");
        self.final_exams.push(entry);
    }
}
