//! Core data model types for gradebook.
//!
//! The seven evaluation slots, their fixed weights, and the values produced
//! by a single evaluation.

use serde::Serialize;
use std::fmt;

/// Number of evaluation components contributing to the final grade.
pub const SLOT_COUNT: usize = 7;

/// Lowest grade a slot accepts.
pub const MIN_GRADE: f64 = 0.0;

/// Highest grade a slot accepts.
pub const MAX_GRADE: f64 = 7.0;

/// Final grades at or above this value pass.
pub const PASSING_GRADE: f64 = 4.0;

/// Fractional weight of each slot, in slot order. Sums to 1.0.
pub const WEIGHTS: [f64; SLOT_COUNT] = [0.07, 0.14, 0.21, 0.07, 0.07, 0.14, 0.30];

/// The fixed evaluation components, in slot order.
pub const SLOTS: [ScoreSlot; SLOT_COUNT] = [
    ScoreSlot::new(0, "Evaluation 1"),
    ScoreSlot::new(1, "Evaluation 2"),
    ScoreSlot::new(2, "Evaluation 3"),
    ScoreSlot::new(3, "Evaluation 4"),
    ScoreSlot::new(4, "Evaluation 5"),
    ScoreSlot::new(5, "Evaluation 6"),
    ScoreSlot::new(6, "Final Exam"),
];

/// One of the seven fixed evaluation components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSlot {
    /// Ordinal position, 0 through 6.
    pub index: usize,
    /// Human-readable name.
    pub label: &'static str,
    /// Fractional contribution to the final grade.
    pub weight: f64,
}

impl ScoreSlot {
    const fn new(index: usize, label: &'static str) -> Self {
        Self {
            index,
            label,
            weight: WEIGHTS[index],
        }
    }

    /// Look up a slot by index.
    pub fn get(index: usize) -> Option<&'static ScoreSlot> {
        SLOTS.get(index)
    }

    /// Weight as a whole percentage, e.g. `21` for `0.21`.
    pub fn weight_percent(&self) -> u32 {
        (self.weight * 100.0).round() as u32
    }
}

impl fmt::Display for ScoreSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.label, self.weight_percent())
    }
}

/// A validated grade in `[0.0, 7.0]`.
///
/// Only produced by [`crate::engine::validate_slot`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub(crate) fn new_unchecked(value: f64) -> Self {
        debug_assert!((MIN_GRADE..=MAX_GRADE).contains(&value));
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Pass/fail classification of a final grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    /// Classify a rounded final grade.
    pub fn from_grade(final_grade: f64) -> Self {
        if final_grade >= PASSING_GRADE {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    pub fn is_passed(self) -> bool {
        self == Verdict::Passed
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "PASSED"),
            Verdict::Failed => write!(f, "FAILED"),
        }
    }
}

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Weighted sum rounded to two decimals.
    pub final_grade: f64,
    pub verdict: Verdict,
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Final Grade: {:.2} - {}", self.final_grade, self.verdict)
    }
}

/// How much one slot's score added to the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotContribution {
    pub slot: ScoreSlot,
    pub score: Score,
    /// `score * weight`, unrounded.
    pub contribution: f64,
}

/// An evaluation result together with its per-slot breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub result: EvaluationResult,
    pub contributions: Vec<SlotContribution>,
}

impl GradeReport {
    /// Sum of the unrounded contributions.
    pub fn weighted_sum(&self) -> f64 {
        self.contributions.iter().map(|c| c.contribution).sum()
    }
}

/// A named batch of students' raw entries.
#[derive(Debug, Clone)]
pub struct GradeSheet {
    /// Human-readable name, e.g. the course.
    pub name: String,
    pub description: String,
    pub students: Vec<StudentEntry>,
}

/// One student's raw entries, in slot order.
#[derive(Debug, Clone)]
pub struct StudentEntry {
    pub name: String,
    pub scores: Vec<String>,
}

impl StudentEntry {
    /// The entries as a fixed-size array, or `None` unless exactly seven were given.
    pub fn raw_inputs(&self) -> Option<&[String; SLOT_COUNT]> {
        self.scores.as_slice().try_into().ok()
    }
}
