//! Required final-exam mark calculation.

/// Calculates the minimum final-exam percentage needed to reach a target
/// overall grade.
///
/// The carry contribution already banked is
/// `carry_percentage / 100 * carry_weight / 100 * 100`; whatever remains of
/// the target must come from the exam, scaled by `exam_weight`.
///
/// # Arguments
///
/// * `target_grade` - The overall grade (0-100) the student is aiming for
/// * `carry_percentage` - Raw carry performance from
///   [`calculate_carry_percentage`](super::calculate_carry_percentage)
/// * `carry_weight` - The course's continuous-assessment weight (0-100)
/// * `exam_weight` - The course's final-exam weight (0-100)
///
/// # Returns
///
/// The required exam percentage, clamped to a minimum of 0 (a target
/// already reached without the exam yields 0, never a negative surplus).
/// Returns 0 when `exam_weight` is 0: there is no exam to require a mark
/// from, and the guard also avoids dividing by zero. Results above 100 are
/// returned as-is and signal an unattainable target.
///
/// # Examples
///
/// ```
/// use grade_engine::calculation::calculate_final_exam_requirement;
///
/// // 80% carry on a 60/40 split banks 48 points; reaching 70 overall
/// // needs 22 more points, i.e. 55% on the exam.
/// let required = calculate_final_exam_requirement(70.0, 80.0, 60.0, 40.0);
/// assert!((required - 55.0).abs() < 1e-9);
/// ```
pub fn calculate_final_exam_requirement(
    target_grade: f64,
    carry_percentage: f64,
    carry_weight: f64,
    exam_weight: f64,
) -> f64 {
    if exam_weight == 0.0 {
        return 0.0;
    }

    let carry_contribution = carry_percentage / 100.0 * carry_weight / 100.0 * 100.0;
    let required_exam_contribution = target_grade - carry_contribution;
    let required_exam_percentage = required_exam_contribution / exam_weight * 100.0;

    required_exam_percentage.max(0.0)
}
