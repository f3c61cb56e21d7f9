//! Configuration types for the session catalog.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the YAML catalog file.

use serde::Deserialize;

fn default_theme_color() -> String {
    "#1f77b4".to_string()
}

/// One course in the catalog used to seed a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseSeed {
    /// Unique course code.
    pub code: String,
    /// Human-readable course name.
    pub name: String,
    /// Continuous-assessment weight (0-100).
    pub carry_weight: f64,
    /// Final-exam weight (0-100).
    pub exam_weight: f64,
}

impl CourseSeed {
    fn new(code: &str, name: &str, carry_weight: f64, exam_weight: f64) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            carry_weight,
            exam_weight,
        }
    }
}

/// The dashboard session configuration.
///
/// `Default` carries the built-in seven-course catalog so a session can
/// start without any file on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Accent color used by the presentation layer.
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    /// Courses to pre-load into a new session.
    pub courses: Vec<CourseSeed>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme_color: default_theme_color(),
            courses: vec![
                CourseSeed::new("BSD 1323", "Storytelling & Data Visualization", 60.0, 40.0),
                CourseSeed::new("BSD 2143", "Operational Research", 60.0, 40.0),
                CourseSeed::new("BUM 2413", "Applied Statistics", 60.0, 40.0),
                CourseSeed::new("BUM 2123", "Applied Calculus", 60.0, 40.0),
                CourseSeed::new("BCU 1023", "Programming Technique", 60.0, 40.0),
                CourseSeed::new("ULS 1312", "Spanish A1", 60.0, 40.0),
                CourseSeed::new("UHE 3032", "Introduction to Human Behaviour", 60.0, 40.0),
            ],
        }
    }
}
