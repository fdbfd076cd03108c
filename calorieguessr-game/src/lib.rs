//! CalorieGuessr Game Engine
//!
//! Platform-agnostic core logic for the CalorieGuessr daily guessing
//! game. This crate provides scoring, session state, persistence
//! contracts and the score drain animation without UI or
//! platform-specific dependencies.

pub mod animation;
pub mod constants;
pub mod data;
pub mod date_key;
pub mod error;
pub mod numbers;
pub mod record;
pub mod scoring;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use animation::{DrainFrame, ScoreAnimator};
pub use data::{DailyGame, Question};
pub use date_key::{DayKey, InvalidDayKey};
pub use error::{AdvanceError, EngineError, GuessError};
pub use record::{ScoreList, ScoreRecord};
pub use scoring::score;
pub use session::{Advance, GameSession, GuessOutcome, SessionBoot, SessionPhase};
pub use store::{MemoryStore, SessionStore, StoreUnavailable, UnavailableStore};

/// Trait for abstracting daily question lookup.
/// Platform-specific implementations should provide this.
pub trait QuestionSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the question set for one day, `None` if no game exists for
    /// that date.
    ///
    /// # Errors
    ///
    /// Returns an error if the document source cannot be reached or the
    /// document cannot be parsed.
    fn load_daily_game(&self, key: &DayKey) -> Result<Option<DailyGame>, Self::Error>;
}

/// Main game engine binding a question source to a session store.
///
/// Constructed once at application start and injected wherever sessions
/// are built; there is no global state.
pub struct GameEngine<Q, S>
where
    Q: QuestionSource,
    S: SessionStore,
{
    questions: Q,
    store: S,
}

impl<Q, S> GameEngine<Q, S>
where
    Q: QuestionSource,
    S: SessionStore + Clone,
{
    /// Create a new game engine with the provided question source and
    /// session store.
    pub const fn new(questions: Q, store: S) -> Self {
        Self { questions, store }
    }

    /// Start (or resume) the session for one day.
    ///
    /// Loads the day's question set and its persisted record, then
    /// applies the resume rule. A store failure or a record that does not
    /// belong to this day degrades to a fresh session; a missing question
    /// set is terminal.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] when no game exists for the day
    /// and [`EngineError::Source`] when the question source fails.
    pub fn start_session(&self, key: &DayKey) -> Result<GameSession<S>, EngineError> {
        let game = self
            .questions
            .load_daily_game(key)
            .map_err(|err| EngineError::Source(err.into()))?
            .ok_or_else(|| EngineError::NotFound { key: key.clone() })?;

        let record = match self.store.load(key) {
            Ok(record) => record,
            Err(err) => {
                log::warn!("score record unavailable for {key}: {err}");
                None
            }
        };
        let record =
            record.filter(|rec| rec.date == *key && rec.scores.len() <= game.question_count());

        Ok(GameSession::start(game, record, self.store.clone()))
    }

    /// Delete every persisted record. Best-effort, like all persistence.
    pub fn clear_records(&self) {
        if let Err(err) = self.store.clear_all() {
            log::warn!("clearing score records failed: {err}");
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
