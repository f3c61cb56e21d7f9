//! Session configuration for the Grade Tracking Engine.
//!
//! A session starts from a course catalog: either the built-in defaults or
//! a YAML file loaded with [`ConfigLoader`].

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CourseSeed, DashboardConfig};
