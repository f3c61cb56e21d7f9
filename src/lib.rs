//! Grade Tracking Engine for a personal academic dashboard
//!
//! This crate provides the core of a single-session academic tracker: typed
//! records for courses, carry marks ("continuous assessment" components) and
//! assignments, an in-memory session store with cascading deletes, pure
//! calculation functions for carry percentages, grade projections, letter
//! grades, final-exam requirements, completion rates and weekly workload,
//! plus CSV export and textual insight generation.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod report;
pub mod store;
