//! Error types for grade validation and the to-do list.
//!
//! All of these are recoverable, caller-facing conditions. The engine reports
//! exactly one [`ValidationFailure`] per evaluation: the first failing slot.

use serde::Serialize;
use thiserror::Error;

use crate::model::ScoreSlot;
use crate::todo::TodoId;

/// Why a raw entry could not become a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    /// The entry was blank after trimming.
    Empty,
    /// The entry is not a finite decimal number.
    NotANumber,
    /// The number lies outside `[0.0, 7.0]`.
    OutOfRange,
}

/// A raw entry failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("{}", self.message())]
pub struct ValidationFailure {
    /// Which of the seven entries failed.
    pub slot_index: usize,
    pub reason: FailureReason,
}

impl ValidationFailure {
    pub fn new(slot_index: usize, reason: FailureReason) -> Self {
        Self { slot_index, reason }
    }

    /// Label of the failing slot.
    pub fn slot_label(&self) -> &'static str {
        ScoreSlot::get(self.slot_index)
            .map(|s| s.label)
            .unwrap_or("unknown slot")
    }

    /// User-facing message naming the slot and the problem.
    pub fn message(&self) -> String {
        let label = self.slot_label();
        match self.reason {
            FailureReason::Empty => format!("please enter the grade for {label}"),
            FailureReason::NotANumber => {
                format!("invalid format for {label}, enter a valid number")
            }
            FailureReason::OutOfRange => {
                format!("the grade must be between 0.0 and 7.0 for {label}")
            }
        }
    }
}

/// Errors from to-do list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No item carries this id.
    #[error("no task with id {0}")]
    NotFound(TodoId),

    /// Task text was blank after trimming.
    #[error("task text cannot be empty")]
    EmptyText,
}
