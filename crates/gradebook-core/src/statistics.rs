//! Batch evaluation of grade sheets and aggregate statistics.

use serde::Serialize;

use crate::engine::evaluate;
use crate::error::ValidationFailure;
use crate::model::{EvaluationResult, GradeSheet, SLOT_COUNT};

/// What happened to one student's entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SheetOutcome {
    Evaluated(EvaluationResult),
    Invalid(ValidationFailure),
    /// The student did not list exactly seven entries.
    Malformed { found: usize },
}

/// A student's name paired with their outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentOutcome {
    pub student: String,
    pub outcome: SheetOutcome,
}

/// Evaluate every student on a sheet. One bad entry never stops the batch.
pub fn evaluate_sheet(sheet: &GradeSheet) -> Vec<StudentOutcome> {
    sheet
        .students
        .iter()
        .map(|student| {
            let outcome = match student.raw_inputs() {
                Some(raw) => match evaluate(raw) {
                    Ok(result) => SheetOutcome::Evaluated(result),
                    Err(failure) => SheetOutcome::Invalid(failure),
                },
                None => {
                    tracing::warn!(
                        student = %student.name,
                        found = student.scores.len(),
                        "expected {SLOT_COUNT} scores"
                    );
                    SheetOutcome::Malformed {
                        found: student.scores.len(),
                    }
                }
            };
            StudentOutcome {
                student: student.name.clone(),
                outcome,
            }
        })
        .collect()
}

/// Aggregate statistics over one sheet's outcomes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSummary {
    pub passed: usize,
    pub failed: usize,
    /// Invalid or malformed entries.
    pub invalid: usize,
    /// Mean final grade over evaluated students.
    pub mean_grade: Option<f64>,
    pub highest_grade: Option<f64>,
    pub lowest_grade: Option<f64>,
}

impl SheetSummary {
    pub fn evaluated(&self) -> usize {
        self.passed + self.failed
    }

    /// Share of evaluated students who passed, in `[0, 1]`.
    pub fn pass_rate(&self) -> Option<f64> {
        match self.evaluated() {
            0 => None,
            n => Some(self.passed as f64 / n as f64),
        }
    }
}

/// Summarize a batch of outcomes.
pub fn summarize(outcomes: &[StudentOutcome]) -> SheetSummary {
    let grades: Vec<f64> = outcomes
        .iter()
        .filter_map(|o| match &o.outcome {
            SheetOutcome::Evaluated(r) => Some(r.final_grade),
            _ => None,
        })
        .collect();

    let passed = outcomes
        .iter()
        .filter(|o| matches!(&o.outcome, SheetOutcome::Evaluated(r) if r.verdict.is_passed()))
        .count();
    let failed = grades.len() - passed;
    let invalid = outcomes.len() - grades.len();

    let mean_grade = if grades.is_empty() {
        None
    } else {
        Some(grades.iter().sum::<f64>() / grades.len() as f64)
    };

    SheetSummary {
        passed,
        failed,
        invalid,
        mean_grade,
        highest_grade: grades.iter().copied().reduce(f64::max),
        lowest_grade: grades.iter().copied().reduce(f64::min),
    }
}
