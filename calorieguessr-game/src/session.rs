//! Game session controller.
//!
//! Ties together the question sequence, the per-question answer
//! lifecycle, resumption from a persisted record, and completion
//! detection. The controller is the sole mutator of both the in-memory
//! session state and the persisted record.

use crate::animation::{DrainFrame, ScoreAnimator};
use crate::data::{DailyGame, Question};
use crate::error::{AdvanceError, GuessError};
use crate::record::{ScoreList, ScoreRecord};
use crate::scoring::score;
use crate::store::SessionStore;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Fresh day, waiting for the player to start.
    NotStarted,
    /// A question is shown and accepting a guess.
    Asking,
    /// The answer is shown; the score drain may still be running.
    Revealed,
    /// Every question answered. Read-only from here on.
    Completed,
}

/// How a day's session came into being, resolved from the persisted
/// record at start. Each variant carries only what its landing view
/// needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionBoot {
    /// No usable record: start from question zero.
    Fresh,
    /// Partially answered record: resume mid-game.
    Resumed { scores: ScoreList },
    /// Fully answered record: show the final score, mutate nothing.
    AlreadyCompleted { scores: ScoreList },
}

impl SessionBoot {
    fn classify(record: Option<&ScoreRecord>, question_count: usize) -> Self {
        match record {
            None => Self::Fresh,
            Some(rec) if rec.scores.is_empty() => Self::Fresh,
            Some(rec) if rec.scores.len() >= question_count => Self::AlreadyCompleted {
                scores: rec.scores.clone(),
            },
            Some(rec) => Self::Resumed {
                scores: rec.scores.clone(),
            },
        }
    }
}

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub points: i32,
    pub actual: i32,
    pub guess: i32,
    /// True if this answered the final question of the day.
    pub last_question: bool,
    /// Generation to present when driving animation frames.
    pub generation: u64,
}

/// Result of an accepted advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion { index: usize },
    Completed,
}

/// One day's playing session over a question set, a persisted record,
/// and a pluggable store.
#[derive(Clone)]
pub struct GameSession<S: SessionStore> {
    game: DailyGame,
    record: ScoreRecord,
    store: S,
    animator: ScoreAnimator,
    last_frame: Option<DrainFrame>,
    phase: SessionPhase,
    boot: SessionBoot,
}

impl<S: SessionStore> GameSession<S> {
    /// Build a session from the day's game and the record the store
    /// returned for it, applying the resume rule: an empty or absent
    /// record starts fresh, a partial record resumes at
    /// `index == scores.len()`, a full record is already completed.
    #[must_use]
    pub fn start(game: DailyGame, record: Option<ScoreRecord>, store: S) -> Self {
        let boot = SessionBoot::classify(record.as_ref(), game.question_count());
        let record = record.unwrap_or_else(|| ScoreRecord::fresh(game.date.clone()));
        let phase = match boot {
            SessionBoot::Fresh => SessionPhase::NotStarted,
            SessionBoot::Resumed { .. } => SessionPhase::Asking,
            SessionBoot::AlreadyCompleted { .. } => SessionPhase::Completed,
        };
        Self {
            game,
            record,
            store,
            animator: ScoreAnimator::new(),
            last_frame: None,
            phase,
            boot,
        }
    }

    /// `NotStarted -> Asking`. No effect in any other phase.
    pub fn begin(&mut self) {
        if self.phase == SessionPhase::NotStarted {
            self.phase = SessionPhase::Asking;
        }
    }

    /// Submit a guess for the current question.
    ///
    /// Scores the guess, appends it to the record, persists the record
    /// (marking it completed on the last question) and arms the score
    /// drain. Persistence is best-effort: a failed save is logged and the
    /// session plays on without resume support.
    ///
    /// # Errors
    ///
    /// Rejects unparseable input and guesses made outside the `Asking`
    /// phase; nothing is mutated or persisted on rejection.
    pub fn submit_guess(&mut self, guess_text: &str, now_ms: f64) -> Result<GuessOutcome, GuessError> {
        match self.phase {
            SessionPhase::NotStarted => return Err(GuessError::NotStarted),
            SessionPhase::Revealed => return Err(GuessError::AnswerRevealed),
            SessionPhase::Completed => return Err(GuessError::AlreadyCompleted),
            SessionPhase::Asking => {}
        }
        let guess: i32 = guess_text
            .trim()
            .parse()
            .map_err(|_| GuessError::InvalidInput)?;
        let question = self
            .game
            .questions
            .get(self.record.answered())
            .ok_or(GuessError::AlreadyCompleted)?;
        let actual = question.calories;
        let points = score(actual, guess);

        let base = self.record.total();
        self.record.push_score(points, self.game.question_count());
        if let Err(err) = self.store.save(&self.record) {
            log::warn!("score record save failed for {}: {err}", self.record.date);
        }
        self.phase = SessionPhase::Revealed;

        let generation = self.animator.begin(base, points, now_ms);
        self.last_frame = self.animator.frame(generation, now_ms);

        Ok(GuessOutcome {
            points,
            actual,
            guess,
            last_question: self.record.completed,
            generation,
        })
    }

    /// Feed a display-refresh tick into the drain. Stale generations are
    /// discarded and leave the session untouched.
    pub fn animation_frame(&mut self, generation: u64, now_ms: f64) -> Option<DrainFrame> {
        let frame = self.animator.frame(generation, now_ms);
        if let Some(applied) = frame {
            self.last_frame = Some(applied);
        }
        frame
    }

    /// `Revealed -> Asking` or `Revealed -> Completed`, available from
    /// the drain's settle frame on. Advancing cancels any still-visible
    /// pending indicator along with its timer.
    ///
    /// # Errors
    ///
    /// Rejects an advance outside `Revealed` or while the drain is still
    /// in flight.
    pub fn advance(&mut self) -> Result<Advance, AdvanceError> {
        if self.phase != SessionPhase::Revealed {
            return Err(AdvanceError::NotRevealed);
        }
        if !self.animator.is_settled() {
            return Err(AdvanceError::DrainInFlight);
        }
        self.animator.finish();
        self.last_frame = None;
        if self.record.completed {
            self.phase = SessionPhase::Completed;
            Ok(Advance::Completed)
        } else {
            self.phase = SessionPhase::Asking;
            Ok(Advance::NextQuestion {
                index: self.record.answered(),
            })
        }
    }

    /// The question currently shown, `None` once the day is completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.game.questions.get(self.question_index())
    }

    /// Index of the question currently shown (the just-answered one while
    /// revealed).
    #[must_use]
    pub fn question_index(&self) -> usize {
        match self.phase {
            SessionPhase::NotStarted | SessionPhase::Asking => self.record.answered(),
            SessionPhase::Revealed => self.record.answered().saturating_sub(1),
            SessionPhase::Completed => self.game.question_count(),
        }
    }

    /// Authoritative cumulative score, `sum(scores)`.
    #[must_use]
    pub fn cumulative_score(&self) -> i32 {
        self.record.total()
    }

    /// Score to display, following the drain while one is running.
    #[must_use]
    pub fn displayed_score(&self) -> i32 {
        self.last_frame
            .map_or_else(|| self.record.total(), |frame| frame.displayed_score)
    }

    /// Points still pending in the drain indicator.
    #[must_use]
    pub fn pending_points(&self) -> Option<i32> {
        self.last_frame.and_then(|frame| frame.pending_points)
    }

    #[must_use]
    pub fn answer_revealed(&self) -> bool {
        self.phase == SessionPhase::Revealed
    }

    /// False while the drain is still running; the "Next" control
    /// enables at the settle frame, without waiting for the pending
    /// indicator to fade.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.phase == SessionPhase::Revealed && self.animator.is_settled()
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn boot(&self) -> &SessionBoot {
        &self.boot
    }

    #[must_use]
    pub const fn record(&self) -> &ScoreRecord {
        &self.record
    }

    #[must_use]
    pub const fn game(&self) -> &DailyGame {
        &self.game
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.game.question_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SCORE_ANIMATION_DURATION_MS, SETTLE_DELAY_MS};
    use crate::date_key::DayKey;
    use crate::store::{MemoryStore, SessionStore as _};
    use chrono::NaiveDate;

    fn sample_game() -> DailyGame {
        let date = DayKey::for_date(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap());
        DailyGame {
            date,
            questions: vec![
                Question {
                    name: "Big Mac".into(),
                    calories: 590,
                    image_url: String::new(),
                },
                Question {
                    name: "Whopper".into(),
                    calories: 670,
                    image_url: String::new(),
                },
                Question {
                    name: "Crunchwrap Supreme".into(),
                    calories: 530,
                    image_url: String::new(),
                },
            ],
        }
    }

    fn settle(session: &mut GameSession<MemoryStore>, generation: u64, start_ms: f64) {
        session.animation_frame(
            generation,
            start_ms + SCORE_ANIMATION_DURATION_MS + SETTLE_DELAY_MS,
        );
    }

    #[test]
    fn fresh_session_waits_for_start() {
        let mut session = GameSession::start(sample_game(), None, MemoryStore::new());
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(
            session.submit_guess("590", 0.0).unwrap_err(),
            GuessError::NotStarted
        );
        session.begin();
        assert_eq!(session.phase(), SessionPhase::Asking);
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn guess_scores_persists_and_reveals() {
        let store = MemoryStore::new();
        let mut session = GameSession::start(sample_game(), None, store.clone());
        session.begin();

        let outcome = session.submit_guess("560", 0.0).unwrap();
        assert_eq!(outcome.points, 970);
        assert!(!outcome.last_question);
        assert!(session.answer_revealed());
        assert_eq!(session.cumulative_score(), 970);
        // Persisted before any animation settles.
        let key = session.record().date.clone();
        let stored = store.load(&key).unwrap().unwrap();
        assert_eq!(stored.scores.as_slice(), &[970]);
        assert!(!stored.completed);
    }

    #[test]
    fn invalid_input_mutates_nothing() {
        let store = MemoryStore::new();
        let mut session = GameSession::start(sample_game(), None, store.clone());
        session.begin();
        for bad in ["", "lots", "12.5", "1e3"] {
            assert_eq!(
                session.submit_guess(bad, 0.0).unwrap_err(),
                GuessError::InvalidInput
            );
        }
        assert_eq!(session.phase(), SessionPhase::Asking);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn advance_blocked_until_drain_settles() {
        let mut session = GameSession::start(sample_game(), None, MemoryStore::new());
        session.begin();
        let outcome = session.submit_guess("590", 0.0).unwrap();
        assert_eq!(session.advance().unwrap_err(), AdvanceError::DrainInFlight);
        assert!(!session.can_advance());

        session.animation_frame(outcome.generation, SCORE_ANIMATION_DURATION_MS / 2.0);
        assert_eq!(session.advance().unwrap_err(), AdvanceError::DrainInFlight);

        // The settle frame unlocks "Next" even though the pending
        // indicator is still showing its +0.
        session.animation_frame(outcome.generation, SCORE_ANIMATION_DURATION_MS);
        assert_eq!(session.pending_points(), Some(0));
        assert!(session.can_advance());
        assert_eq!(
            session.advance().unwrap(),
            Advance::NextQuestion { index: 1 }
        );
        assert_eq!(session.phase(), SessionPhase::Asking);
        // Advancing cancels the indicator along with its timer.
        assert_eq!(session.pending_points(), None);
    }

    #[test]
    fn displayed_score_follows_drain() {
        let mut session = GameSession::start(sample_game(), None, MemoryStore::new());
        session.begin();
        let outcome = session.submit_guess("590", 0.0).unwrap();
        assert_eq!(outcome.points, 1_000);
        assert_eq!(session.displayed_score(), 0);
        assert_eq!(session.pending_points(), Some(1_000));

        session.animation_frame(outcome.generation, SCORE_ANIMATION_DURATION_MS / 4.0);
        assert_eq!(session.displayed_score(), 250);
        assert_eq!(session.pending_points(), Some(750));

        settle(&mut session, outcome.generation, 0.0);
        assert_eq!(session.displayed_score(), 1_000);
        assert_eq!(session.cumulative_score(), 1_000);
    }

    #[test]
    fn stale_tick_does_not_touch_session() {
        let mut session = GameSession::start(sample_game(), None, MemoryStore::new());
        session.begin();
        let first = session.submit_guess("590", 0.0).unwrap();
        settle(&mut session, first.generation, 0.0);
        session.advance().unwrap();
        let second = session.submit_guess("700", 3_000.0).unwrap();

        assert!(session.animation_frame(first.generation, 3_100.0).is_none());
        settle(&mut session, second.generation, 3_000.0);
        assert_eq!(session.displayed_score(), 1_000 + second.points);
    }

    #[test]
    fn completed_day_is_read_only() {
        let store = MemoryStore::new();
        let mut record = ScoreRecord::fresh(sample_game().date.clone());
        for points in [1_000, 500, 300] {
            record.push_score(points, 3);
        }
        let mut session = GameSession::start(sample_game(), Some(record), store.clone());
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.cumulative_score(), 1_800);
        assert_eq!(
            session.submit_guess("500", 0.0).unwrap_err(),
            GuessError::AlreadyCompleted
        );
        assert_eq!(store.save_count(), 0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn resume_lands_on_first_unanswered_question() {
        let mut record = ScoreRecord::fresh(sample_game().date.clone());
        record.push_score(1_000, 3);
        record.push_score(500, 3);
        let session = GameSession::start(sample_game(), Some(record), MemoryStore::new());
        assert_eq!(session.phase(), SessionPhase::Asking);
        assert_eq!(session.question_index(), 2);
        assert_eq!(session.cumulative_score(), 1_500);
        assert!(matches!(session.boot(), SessionBoot::Resumed { .. }));
    }

    #[test]
    fn empty_record_boots_fresh() {
        let record = ScoreRecord::fresh(sample_game().date.clone());
        let session = GameSession::start(sample_game(), Some(record), MemoryStore::new());
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(*session.boot(), SessionBoot::Fresh);
    }
}
