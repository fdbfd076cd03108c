//! Score drain animation scheduler.
//!
//! The animator is a pure, time-fed state machine: the platform layer
//! owns the display-refresh callback loop and feeds millisecond
//! timestamps in, which keeps the whole drain lifecycle testable without
//! a browser. States run `Idle -> Draining -> Settled -> Idle`.
//!
//! Every drain cycle gets a generation number. Frames submitted with a
//! stale generation are discarded, so a cancelled callback chain can
//! never mutate state after a new drain begins.

use crate::constants::{SCORE_ANIMATION_DURATION_MS, SETTLE_DELAY_MS};
use crate::numbers::round_f64_to_i32;

/// One published animation frame.
///
/// `displayed_score` is a visual value only; the authoritative cumulative
/// score is owned by the session controller and is never derived from
/// frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainFrame {
    /// Base score plus the points drained in so far.
    pub displayed_score: i32,
    /// Points still pending, `Some(0)` between settle and indicator
    /// clear, `None` once the indicator has cleared.
    pub pending_points: Option<i32>,
    /// True from the exact-settle frame onward.
    pub settled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DrainPhase {
    Idle,
    Draining {
        base: i32,
        initial: i32,
        started_at: f64,
    },
    Settled {
        base: i32,
        initial: i32,
        settled_at: f64,
        indicator_cleared: bool,
    },
}

/// Drives the linear drain of a question's points into the visible score.
#[derive(Debug, Clone)]
pub struct ScoreAnimator {
    phase: DrainPhase,
    generation: u64,
}

impl Default for ScoreAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreAnimator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: DrainPhase::Idle,
            generation: 0,
        }
    }

    /// Start a drain of `initial_points` on top of `base_score`, the
    /// cumulative score before this question. Returns the generation that
    /// subsequent [`frame`](Self::frame) calls must present.
    ///
    /// Starting while a drain is in flight cancels it; the caller passes
    /// a `base_score` that already includes the cancelled drain's points,
    /// so nothing is ever left half-applied. Non-positive points settle
    /// instantly with no animation.
    pub fn begin(&mut self, base_score: i32, initial_points: i32, now_ms: f64) -> u64 {
        self.generation += 1;
        self.phase = if initial_points <= 0 {
            DrainPhase::Settled {
                base: base_score,
                initial: initial_points.max(0),
                settled_at: now_ms,
                indicator_cleared: true,
            }
        } else {
            DrainPhase::Draining {
                base: base_score,
                initial: initial_points,
                started_at: now_ms,
            }
        };
        self.generation
    }

    /// Advance the animation to `now_ms` and publish a frame.
    ///
    /// Returns `None` for a stale generation or when idle. The settle
    /// frame fixes `displayed_score = base + initial` exactly; the
    /// pending indicator clears once the settle delay has elapsed.
    pub fn frame(&mut self, generation: u64, now_ms: f64) -> Option<DrainFrame> {
        if generation != self.generation {
            return None;
        }
        match self.phase {
            DrainPhase::Idle => None,
            DrainPhase::Draining {
                base,
                initial,
                started_at,
            } => {
                let t = ((now_ms - started_at) / SCORE_ANIMATION_DURATION_MS).clamp(0.0, 1.0);
                if t >= 1.0 {
                    self.phase = DrainPhase::Settled {
                        base,
                        initial,
                        settled_at: now_ms,
                        indicator_cleared: false,
                    };
                    Some(DrainFrame {
                        displayed_score: base + initial,
                        pending_points: Some(0),
                        settled: true,
                    })
                } else {
                    let remaining = round_f64_to_i32(f64::from(initial) * (1.0 - t));
                    Some(DrainFrame {
                        displayed_score: base + (initial - remaining),
                        pending_points: Some(remaining),
                        settled: false,
                    })
                }
            }
            DrainPhase::Settled {
                base,
                initial,
                settled_at,
                indicator_cleared,
            } => {
                let cleared = indicator_cleared || now_ms - settled_at >= SETTLE_DELAY_MS;
                self.phase = DrainPhase::Settled {
                    base,
                    initial,
                    settled_at,
                    indicator_cleared: cleared,
                };
                Some(DrainFrame {
                    displayed_score: base + initial,
                    pending_points: if cleared { None } else { Some(0) },
                    settled: true,
                })
            }
        }
    }

    /// Current generation; only frames presenting this value are applied.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn is_draining(&self) -> bool {
        matches!(self.phase, DrainPhase::Draining { .. })
    }

    /// True once the drain has reached its settle frame. The pending
    /// indicator may still be visible for the settle delay.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self.phase, DrainPhase::Settled { .. })
    }

    /// True once the drain has settled and the pending indicator has
    /// cleared, i.e. there is nothing left to animate and the frame
    /// loop may stop.
    #[must_use]
    pub const fn drain_complete(&self) -> bool {
        matches!(
            self.phase,
            DrainPhase::Settled {
                indicator_cleared: true,
                ..
            }
        )
    }

    /// `Settled -> Idle`, when the next question begins or the session
    /// ends. Bumps the generation so any timer still in flight goes
    /// stale.
    pub fn finish(&mut self) {
        self.phase = DrainPhase::Idle;
        self.generation += 1;
    }
}
