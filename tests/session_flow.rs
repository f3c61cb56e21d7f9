//! End-to-end session scenarios for the Grade Tracking Engine.
//!
//! This suite walks a full interactive session: seed the catalog, record
//! carry marks and assignments, derive grades and statistics, export CSV
//! snapshots, and tear a course down with its dependents.

use chrono::NaiveDate;

use grade_engine::calculation::{
    GradeLetter, calculate_carry_percentage, calculate_completion_rate, calculate_current_grade,
    calculate_final_exam_requirement, course_statistics, get_grade_letter, get_weekly_workload,
};
use grade_engine::config::DashboardConfig;
use grade_engine::export::{assignments_csv, carry_marks_csv, export_filename};
use grade_engine::models::{Assignment, AssignmentStatus, CarryMarkEntry, FinalExamEntry};
use grade_engine::report::build_report;
use grade_engine::store::SessionStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn make_entry(course_code: &str, earned: f64, max_possible: f64) -> CarryMarkEntry {
    CarryMarkEntry {
        course_code: course_code.to_string(),
        element_type: "Quiz".to_string(),
        element_name: format!("Quiz {}", earned),
        earned,
        max_possible,
        weight_percentage: 10.0,
        final_contribution: None,
        date_added: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
    }
}

fn make_assignment(course_code: &str, due_date: &str, status: AssignmentStatus) -> Assignment {
    Assignment {
        title: format!("{} work", course_code),
        course_code: course_code.to_string(),
        kind: "Homework".to_string(),
        due_date: due_date.to_string(),
        status,
        description: String::new(),
    }
}

fn seeded_store() -> SessionStore {
    SessionStore::with_catalog(&DashboardConfig::default()).expect("default catalog is valid")
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_session_starts_with_default_catalog() {
    let store = seeded_store();
    assert_eq!(store.courses().len(), 7);
    assert!(store.carry_marks().is_empty());
    assert!(store.assignments().is_empty());

    let course = store.course_by_code("BSD 1323").unwrap();
    assert_eq!(course.carry_weight + course.exam_weight, 100.0);
}

#[test]
fn test_record_marks_and_project_grade() {
    let mut store = seeded_store();
    let stamp = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    store.add_carry_mark_on(make_entry("BSD 1323", 8.0, 10.0), stamp);
    store.add_carry_mark_on(make_entry("BSD 1323", 18.0, 20.0), stamp);

    let carry = calculate_carry_percentage("BSD 1323", store.carry_marks());
    assert!((carry - 86.66666666666667).abs() < 1e-9);

    let current = calculate_current_grade("BSD 1323", store.carry_marks(), store.courses());
    assert!((current - 52.0).abs() < 1e-9);

    // 86.67% carry on a 60/40 split banks 52 points; a 70 target needs 45%.
    let required = calculate_final_exam_requirement(70.0, carry, 60.0, 40.0);
    assert!((required - 45.0).abs() < 1e-9);
    assert_eq!(get_grade_letter(carry), GradeLetter::A);
}

#[test]
fn test_assignment_lifecycle_and_workload() {
    let mut store = seeded_store();
    store.add_assignment(make_assignment(
        "BSD 1323",
        "2026-03-06",
        AssignmentStatus::Pending,
    ));
    store.add_assignment(make_assignment(
        "BUM 2413",
        "2026-03-09",
        AssignmentStatus::Pending,
    ));

    store
        .update_assignment_status(0, AssignmentStatus::Completed)
        .unwrap();
    assert_eq!(calculate_completion_rate(store.assignments()), 50.0);

    let workload = get_weekly_workload(store.assignments());
    assert_eq!(workload.len(), 2);
    assert_eq!(workload[0].total_assignments, 1);
    assert_eq!(workload[0].pending_assignments, 0);
    assert_eq!(workload[1].pending_assignments, 1);
}

#[test]
fn test_delete_course_cascades_across_all_collections() {
    let mut store = seeded_store();
    let stamp = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    store.add_carry_mark_on(make_entry("BSD 1323", 8.0, 10.0), stamp);
    store.add_assignment(make_assignment(
        "BSD 1323",
        "2026-03-06",
        AssignmentStatus::Pending,
    ));
    store.add_final_exam(FinalExamEntry {
        course_code: "BSD 1323".to_string(),
        exam_date: NaiveDate::from_ymd_opt(2026, 6, 15),
        target_grade: Some(75.0),
    });
    store.add_carry_mark_on(make_entry("BUM 2413", 9.0, 10.0), stamp);

    let removed = store.delete_course(0).unwrap();
    assert_eq!(removed.code, "BSD 1323");

    assert_eq!(store.courses().len(), 6);
    assert_eq!(store.carry_marks().len(), 1);
    assert_eq!(store.carry_marks()[0].course_code, "BUM 2413");
    assert!(store.assignments().is_empty());
    assert!(store.final_exams().is_empty());

    // The calculator now treats the deleted course as a missing reference.
    assert_eq!(
        calculate_current_grade("BSD 1323", store.carry_marks(), store.courses()),
        0.0
    );
}

#[test]
fn test_export_round_of_a_working_session() {
    let mut store = seeded_store();
    let stamp = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    store.add_carry_mark_on(make_entry("BSD 1323", 8.0, 10.0), stamp);
    store.add_assignment(make_assignment(
        "BSD 1323",
        "2026-03-06",
        AssignmentStatus::Pending,
    ));

    let marks_csv = carry_marks_csv(store.carry_marks()).unwrap();
    assert!(marks_csv.starts_with("course_code,element_type,element_name,"));
    assert!(marks_csv.contains("BSD 1323"));

    let assignments_csv = assignments_csv(store.assignments()).unwrap();
    assert!(assignments_csv.starts_with("title,course_code,type,due_date,status,description"));

    assert_eq!(
        export_filename("carry_marks", stamp),
        "carry_marks_20260302.csv"
    );
}

#[test]
fn test_statistics_and_report_over_mixed_session() {
    let mut store = seeded_store();
    let stamp = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    // One course with raw marks, one with weighted contributions.
    store.add_carry_mark_on(make_entry("BSD 1323", 8.0, 10.0), stamp);
    let mut weighted = make_entry("BUM 2413", 18.0, 20.0);
    weighted.final_contribution = Some(9.0);
    store.add_carry_mark_on(weighted, stamp);

    store.add_assignment(make_assignment(
        "BSD 1323",
        "2026-02-20",
        AssignmentStatus::Pending,
    ));

    let stats = course_statistics(store.courses(), store.carry_marks(), store.assignments());
    assert_eq!(stats.len(), 7);

    let bsd = stats.iter().find(|s| s.course_code == "BSD 1323").unwrap();
    assert_eq!(bsd.letter_grade, Some(GradeLetter::AMinus));
    assert_eq!(bsd.total_assignments, 1);

    let bum = stats.iter().find(|s| s.course_code == "BUM 2413").unwrap();
    assert!((bum.current_grade - 9.0).abs() < 1e-9);
    // 9 of the 10 weighted points entered so far projects to 90% = A+.
    assert_eq!(bum.letter_grade, Some(GradeLetter::APlus));

    let report = build_report(
        store.courses(),
        store.carry_marks(),
        store.assignments(),
        stamp,
    );
    assert!(report.contains("## Course Performance"));
    assert!(report.contains("overdue assignment"));
}
