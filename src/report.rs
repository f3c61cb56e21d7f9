//! Overview metrics, insights and the markdown progress report.
//!
//! The textual layer of the dashboard: headline numbers across every
//! course, threshold-based study recommendations, and a markdown report
//! stitching both together.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::calculation::{
    CourseStatistics, calculate_completion_rate, course_statistics,
};
use crate::models::{Assignment, CarryMarkEntry, Course};

/// Headline metrics across the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewMetrics {
    /// Number of courses in the session.
    pub total_courses: usize,
    /// Mean per-entry carry performance, when any marks exist.
    pub average_performance: Option<f64>,
    /// Assignment completion rate, when any assignments exist.
    pub completion_rate: Option<f64>,
    /// Number of assignments still pending.
    pub pending_assignments: usize,
}

/// Computes the overview metrics shown at the top of the dashboard.
pub fn overview(
    courses: &[Course],
    carry_marks: &[CarryMarkEntry],
    assignments: &[Assignment],
) -> OverviewMetrics {
    let average_performance = if carry_marks.is_empty() {
        None
    } else {
        let sum: f64 = carry_marks.iter().map(|e| e.percentage()).sum();
        Some(sum / carry_marks.len() as f64)
    };

    let completion_rate = if assignments.is_empty() {
        None
    } else {
        Some(calculate_completion_rate(assignments))
    };

    OverviewMetrics {
        total_courses: courses.len(),
        average_performance,
        completion_rate,
        pending_assignments: assignments.iter().filter(|a| a.status.is_pending()).count(),
    }
}

/// Counts pending assignments whose due date is strictly before `today`.
///
/// Assignments with unparseable due dates are ignored.
pub fn count_overdue(assignments: &[Assignment], today: NaiveDate) -> usize {
    assignments
        .iter()
        .filter(|a| a.status.is_pending())
        .filter(|a| {
            NaiveDate::parse_from_str(&a.due_date, "%Y-%m-%d")
                .map(|due| due < today)
                .unwrap_or(false)
        })
        .count()
}

fn weakest_course(stats: &[CourseStatistics]) -> Option<&CourseStatistics> {
    stats.iter().min_by(|a, b| {
        a.current_grade
            .partial_cmp(&b.current_grade)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Generates threshold-based study recommendations.
///
/// Returns an empty vector when there is no data to comment on.
pub fn insights(
    courses: &[Course],
    carry_marks: &[CarryMarkEntry],
    assignments: &[Assignment],
    today: NaiveDate,
) -> Vec<String> {
    let mut insights = Vec::new();
    let metrics = overview(courses, carry_marks, assignments);

    if let Some(avg) = metrics.average_performance {
        if avg >= 85.0 {
            insights.push(
                "Excellent performance! You're maintaining high standards across your assessments."
                    .to_string(),
            );
        } else if avg >= 70.0 {
            insights.push(
                "Good performance overall. Consider focusing on weaker areas to boost your grades."
                    .to_string(),
            );
        } else {
            insights.push(
                "Performance needs improvement. Consider seeking help or adjusting study strategies."
                    .to_string(),
            );
        }

        let stats = course_statistics(courses, carry_marks, assignments);
        if let Some(weakest) = weakest_course(&stats) {
            insights.push(format!(
                "Focus area: {} has your lowest current grade ({:.1}%).",
                weakest.course_code, weakest.current_grade
            ));
        }
    }

    if let Some(rate) = metrics.completion_rate {
        if rate >= 90.0 {
            insights.push("Great job on assignments! You're staying on top of your work.".to_string());
        } else if rate >= 70.0 {
            insights.push(
                "Good assignment management. Try to improve completion rates further.".to_string(),
            );
        } else {
            insights.push(
                "Assignment management needs attention. Consider better time management strategies."
                    .to_string(),
            );
        }

        let overdue = count_overdue(assignments, today);
        if overdue > 0 {
            insights.push(format!(
                "Urgent: you have {} overdue assignment(s). Address these immediately.",
                overdue
            ));
        }
    }

    insights
}

/// Builds a markdown progress report for the session.
pub fn build_report(
    courses: &[Course],
    carry_marks: &[CarryMarkEntry],
    assignments: &[Assignment],
    today: NaiveDate,
) -> String {
    let metrics = overview(courses, carry_marks, assignments);
    let stats = course_statistics(courses, carry_marks, assignments);
    let recommendations = insights(courses, carry_marks, assignments, today);

    let mut output = String::new();

    let _ = writeln!(output, "# Academic Progress Report");
    let _ = writeln!(output, "Generated on {}", today);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overview");
    let _ = writeln!(output, "- Courses: {}", metrics.total_courses);
    match metrics.average_performance {
        Some(avg) => {
            let _ = writeln!(output, "- Average performance: {:.1}%", avg);
        }
        None => {
            let _ = writeln!(output, "- Average performance: no data");
        }
    }
    match metrics.completion_rate {
        Some(rate) => {
            let _ = writeln!(output, "- Assignment completion: {:.1}%", rate);
        }
        None => {
            let _ = writeln!(output, "- Assignment completion: no data");
        }
    }
    let _ = writeln!(output, "- Pending assignments: {}", metrics.pending_assignments);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Course Performance");

    if stats.is_empty() {
        let _ = writeln!(output, "No courses in this session.");
    } else {
        for stat in &stats {
            let letter = stat
                .letter_grade
                .map(|l| l.as_str())
                .unwrap_or("no letter yet");
            let _ = writeln!(
                output,
                "- {} ({}): carry {:.1}%, current grade {:.1} ({})",
                stat.course_code, stat.course_name, stat.carry_percentage, stat.current_grade,
                letter
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Insights");

    if recommendations.is_empty() {
        let _ = writeln!(
            output,
            "Add some courses, carry marks and assignments to see personalized insights."
        );
    } else {
        for insight in &recommendations {
            let _ = writeln!(output, "- {}", insight);
        }
    }

    output
}
