//! Catalog loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a session
//! catalog from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::DashboardConfig;

/// Loads and validates the session catalog.
///
/// # File format
///
/// ```text
/// theme_color: "#1f77b4"   # optional
/// courses:
///   - code: "BSD 1323"
///     name: "Storytelling & Data Visualization"
///     carry_weight: 60
///     exam_weight: 40
/// ```
///
/// # Example
///
/// ```no_run
/// use grade_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/courses.yaml").unwrap();
/// println!("{} courses in catalog", config.courses.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the catalog from a YAML file.
    ///
    /// Each course's weight split is validated at load time so a skewed
    /// catalog cannot silently distort grade math later.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file is missing ([`EngineError::ConfigNotFound`])
    /// - the file is not valid YAML ([`EngineError::ConfigParseError`])
    /// - a course's weights do not sum to 100
    ///   ([`EngineError::InvalidCourseWeights`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<DashboardConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: DashboardConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        for seed in &config.courses {
            if (seed.carry_weight + seed.exam_weight - 100.0).abs() > 1e-6 {
                return Err(EngineError::InvalidCourseWeights {
                    code: seed.code.clone(),
                    carry_weight: seed.carry_weight,
                    exam_weight: seed.exam_weight,
                });
            }
        }

        info!(path = %path_str, courses = config.courses.len(), "catalog loaded");
        Ok(config)
    }
}
