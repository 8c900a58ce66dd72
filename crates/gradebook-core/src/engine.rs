//! Grade evaluation engine.
//!
//! Turns seven raw text entries into a weighted final grade and a pass/fail
//! verdict. Validation scans slots in index order and stops at the first
//! failing entry.

use crate::error::{FailureReason, ValidationFailure};
use crate::model::{
    EvaluationResult, GradeReport, Score, SlotContribution, Verdict, MAX_GRADE, MIN_GRADE,
    SLOTS, SLOT_COUNT,
};

/// Validate one raw entry for the slot at `index`.
///
/// The entry is trimmed first. Non-finite values such as `NaN` or `inf` are
/// rejected as not-a-number.
pub fn validate_slot(raw_value: &str, index: usize) -> Result<Score, ValidationFailure> {
    let trimmed = raw_value.trim();
    if trimmed.is_empty() {
        return Err(ValidationFailure::new(index, FailureReason::Empty));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationFailure::new(index, FailureReason::NotANumber))?;
    if !value.is_finite() {
        return Err(ValidationFailure::new(index, FailureReason::NotANumber));
    }

    if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
        return Err(ValidationFailure::new(index, FailureReason::OutOfRange));
    }

    // `-0` is in range; store it as `0.0` so no sum comes out as `-0.0`.
    Ok(Score::new_unchecked(value + 0.0))
}

/// Validate all seven entries, returning the first failure.
pub fn validate_all<S: AsRef<str>>(
    raw_inputs: &[S; SLOT_COUNT],
) -> Result<[Score; SLOT_COUNT], ValidationFailure> {
    let mut scores = [Score::new_unchecked(MIN_GRADE); SLOT_COUNT];
    for (index, raw) in raw_inputs.iter().enumerate() {
        scores[index] = validate_slot(raw.as_ref(), index)?;
    }
    Ok(scores)
}

/// Evaluate seven raw entries into a final grade and verdict.
pub fn evaluate<S: AsRef<str>>(
    raw_inputs: &[S; SLOT_COUNT],
) -> Result<EvaluationResult, ValidationFailure> {
    let scores = validate_all(raw_inputs)?;
    Ok(result_from_scores(&scores))
}

/// Like [`evaluate`], but also returns how much each slot contributed.
pub fn evaluate_detailed<S: AsRef<str>>(
    raw_inputs: &[S; SLOT_COUNT],
) -> Result<GradeReport, ValidationFailure> {
    let scores = validate_all(raw_inputs)?;
    let contributions = SLOTS
        .iter()
        .zip(scores.iter())
        .map(|(slot, score)| SlotContribution {
            slot: *slot,
            score: *score,
            contribution: score.value() * slot.weight,
        })
        .collect();

    Ok(GradeReport {
        result: result_from_scores(&scores),
        contributions,
    })
}

fn result_from_scores(scores: &[Score; SLOT_COUNT]) -> EvaluationResult {
    let weighted_sum: f64 = scores
        .iter()
        .zip(SLOTS.iter())
        .map(|(score, slot)| score.value() * slot.weight)
        .sum();
    let final_grade = round2(weighted_sum);
    let verdict = Verdict::from_grade(final_grade);

    tracing::debug!(weighted_sum, final_grade, %verdict, "evaluated grades");

    EvaluationResult {
        final_grade,
        verdict,
    }
}

/// Round to two decimals, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
