//! Letter-grade mapping.
//!
//! This module provides the letter-grade scale used across the dashboard
//! and the total lookup function from percentages onto it.

use serde::{Serialize, Serializer};

/// A letter grade on the dashboard's scale.
///
/// Variants are ordered from best to worst; the derived `Ord` follows that
/// declaration order, so `GradeLetter::APlus < GradeLetter::F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GradeLetter {
    /// 90 and above.
    APlus,
    /// 85 to below 90.
    A,
    /// 80 to below 85.
    AMinus,
    /// 75 to below 80.
    BPlus,
    /// 70 to below 75.
    B,
    /// 65 to below 70.
    BMinus,
    /// 60 to below 65.
    CPlus,
    /// 55 to below 60.
    C,
    /// 50 to below 55.
    CMinus,
    /// Below 50.
    F,
}

impl GradeLetter {
    /// Returns the display form of the letter (e.g., "A+").
    pub fn as_str(self) -> &'static str {
        match self {
            GradeLetter::APlus => "A+",
            GradeLetter::A => "A",
            GradeLetter::AMinus => "A-",
            GradeLetter::BPlus => "B+",
            GradeLetter::B => "B",
            GradeLetter::BMinus => "B-",
            GradeLetter::CPlus => "C+",
            GradeLetter::C => "C",
            GradeLetter::CMinus => "C-",
            GradeLetter::F => "F",
        }
    }
}

impl std::fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GradeLetter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Maps a percentage to its letter grade.
///
/// Total over all reals: closed lower boundaries at 90, 85, 80, 75, 70, 65,
/// 60, 55 and 50, descending without overlap or gaps; everything below 50
/// (including negative inputs) is an F.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::{GradeLetter, get_grade_letter};
///
/// assert_eq!(get_grade_letter(90.0), GradeLetter::APlus);
/// assert_eq!(get_grade_letter(89.999), GradeLetter::A);
/// assert_eq!(get_grade_letter(49.999), GradeLetter::F);
/// ```
pub fn get_grade_letter(percentage: f64) -> GradeLetter {
    if percentage >= 90.0 {
        GradeLetter::APlus
    } else if percentage >= 85.0 {
        GradeLetter::A
    } else if percentage >= 80.0 {
        GradeLetter::AMinus
    } else if percentage >= 75.0 {
        GradeLetter::BPlus
    } else if percentage >= 70.0 {
        GradeLetter::B
    } else if percentage >= 65.0 {
        GradeLetter::BMinus
    } else if percentage >= 60.0 {
        GradeLetter::CPlus
    } else if percentage >= 55.0 {
        GradeLetter::C
    } else if percentage >= 50.0 {
        GradeLetter::CMinus
    } else {
        GradeLetter::F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values_map_exactly() {
        assert_eq!(get_grade_letter(90.0), GradeLetter::APlus);
        assert_eq!(get_grade_letter(85.0), GradeLetter::A);
        assert_eq!(get_grade_letter(80.0), GradeLetter::AMinus);
        assert_eq!(get_grade_letter(75.0), GradeLetter::BPlus);
        assert_eq!(get_grade_letter(70.0), GradeLetter::B);
        assert_eq!(get_grade_letter(65.0), GradeLetter::BMinus);
        assert_eq!(get_grade_letter(60.0), GradeLetter::CPlus);
        assert_eq!(get_grade_letter(55.0), GradeLetter::C);
        assert_eq!(get_grade_letter(50.0), GradeLetter::CMinus);
    }

    #[test]
    fn test_values_just_below_boundaries() {
        assert_eq!(get_grade_letter(89.999), GradeLetter::A);
        assert_eq!(get_grade_letter(49.999), GradeLetter::F);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(get_grade_letter(100.0), GradeLetter::APlus);
        assert_eq!(get_grade_letter(0.0), GradeLetter::F);
        assert_eq!(get_grade_letter(-10.0), GradeLetter::F);
        assert_eq!(get_grade_letter(250.0), GradeLetter::APlus);
    }

    #[test]
    fn test_display_matches_letter_strings() {
        assert_eq!(GradeLetter::APlus.to_string(), "A+");
        assert_eq!(GradeLetter::AMinus.to_string(), "A-");
        assert_eq!(GradeLetter::CMinus.to_string(), "C-");
        assert_eq!(GradeLetter::F.to_string(), "F");
    }

    #[test]
    fn test_serializes_as_letter_string() {
        let json = serde_json::to_string(&GradeLetter::BPlus).unwrap();
        assert_eq!(json, "\"B+\"");
    }

    #[test]
    fn test_ordering_follows_scale() {
        assert!(GradeLetter::APlus < GradeLetter::A);
        assert!(GradeLetter::CMinus < GradeLetter::F);
    }
}
