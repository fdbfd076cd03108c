//! Error taxonomy for the game engine.
//!
//! Only [`EngineError`] is user-visible; guess and advance rejections are
//! recovered locally by the UI, and persistence faults are absorbed by
//! the engine.

use crate::date_key::DayKey;
use thiserror::Error;

/// Session-start failures. `NotFound` is terminal for the day.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no game available for {key}")]
    NotFound { key: DayKey },
    #[error("failed to load daily game")]
    Source(#[source] anyhow::Error),
}

/// A rejected guess. No state is mutated and nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess is not a whole number")]
    InvalidInput,
    #[error("the game has not been started")]
    NotStarted,
    #[error("answer already revealed for this question")]
    AnswerRevealed,
    #[error("today's game is already completed")]
    AlreadyCompleted,
}

/// A rejected advance to the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    #[error("no revealed answer to advance from")]
    NotRevealed,
    #[error("score drain still in flight")]
    DrainInFlight,
}
