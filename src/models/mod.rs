//! Core data models for the Grade Tracking Engine.
//!
//! This module contains all the domain records used throughout the engine.

mod assignment;
mod carry_mark;
mod course;
mod final_exam;

pub use assignment::{Assignment, AssignmentStatus};
pub use carry_mark::CarryMarkEntry;
pub use course::Course;
pub use final_exam::FinalExamEntry;
