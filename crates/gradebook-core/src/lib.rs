//! gradebook-core — weighted course grade engine and to-do list model.
//!
//! The engine validates seven raw score entries, computes the weighted final
//! grade, and classifies it as passed or failed. Everything here is pure and
//! synchronous.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod statistics;
pub mod todo;

pub use engine::{evaluate, evaluate_detailed, validate_slot};
pub use error::{FailureReason, TodoError, ValidationFailure};
pub use model::{EvaluationResult, Score, ScoreSlot, Verdict, SLOTS, SLOT_COUNT, WEIGHTS};
