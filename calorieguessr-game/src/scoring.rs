//! Scoring engine: maps a guess to points.

use crate::constants::MAX_POINTS;
use crate::numbers::clamp_i64_to_i32;

/// Points for a guess against the actual calorie value.
///
/// `max(0, MAX_POINTS - |actual - guess|)`: deterministic, total over all
/// integer inputs, symmetric around `actual`, and clamped to
/// `[0, MAX_POINTS]`. Input validation (parseable integer) is the
/// caller's responsibility.
#[must_use]
pub fn score(actual: i32, guess: i32) -> i32 {
    let distance = (i64::from(actual) - i64::from(guess)).abs();
    clamp_i64_to_i32((i64::from(MAX_POINTS) - distance).max(0))
}
