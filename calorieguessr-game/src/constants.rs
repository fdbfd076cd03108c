//! Centralized tuning constants for CalorieGuessr game logic.
//!
//! These values define the deterministic math for scoring and the score
//! drain animation. Keeping them together ensures that gameplay can only
//! be adjusted via code changes reviewed in version control.

/// Maximum points awarded for a single question (exact guess).
pub const MAX_POINTS: i32 = 1_000;

/// Number of questions in one daily game.
pub const QUESTIONS_PER_DAY: usize = 5;

/// Duration of the linear score drain animation.
pub const SCORE_ANIMATION_DURATION_MS: f64 = 1_000.0;

/// Delay after a drain settles before the points-gained indicator clears.
pub const SETTLE_DELAY_MS: f64 = 1_000.0;

/// Namespace prefix for persisted score records. The full key is this
/// prefix plus an underscore plus the day key.
pub const SCORE_RECORD_PREFIX: &str = "calorieguessr.score";

/// Retention of a persisted score record. Records are only meaningful for
/// the day they were written, so one day is enough.
pub const SCORE_RECORD_RETENTION_DAYS: u32 = 1;

/// How many days back the past-games browser probes for published
/// question documents. The static document set has no listing endpoint,
/// so availability is discovered one day at a time.
pub const PAST_GAMES_WINDOW_DAYS: usize = 14;
