//! Persisted per-day score record.

use crate::constants::QUESTIONS_PER_DAY;
use crate::date_key::DayKey;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered per-question scores for one day. Inline capacity matches the
/// fixed daily question count.
pub type ScoreList = SmallVec<[i32; QUESTIONS_PER_DAY]>;

/// The persisted state of one day's session: one appended score per
/// answered question, in question order, plus a completion flag.
///
/// Invariants (maintained by the session controller):
/// - `scores` only grows, by one element per answered question;
/// - `completed` holds exactly when every question is answered;
/// - a completed record is never written again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub date: DayKey,
    pub scores: ScoreList,
    #[serde(default)]
    pub completed: bool,
}

impl ScoreRecord {
    /// An empty record for a fresh day.
    #[must_use]
    pub fn fresh(date: DayKey) -> Self {
        Self {
            date,
            scores: ScoreList::new(),
            completed: false,
        }
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.scores.len()
    }

    /// Authoritative cumulative score.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.scores.iter().sum()
    }

    pub(crate) fn push_score(&mut self, points: i32, question_count: usize) {
        self.scores.push(points);
        self.completed = self.scores.len() == question_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key() -> DayKey {
        DayKey::for_date(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap())
    }

    #[test]
    fn fresh_record_is_empty_and_open() {
        let record = ScoreRecord::fresh(key());
        assert_eq!(record.answered(), 0);
        assert_eq!(record.total(), 0);
        assert!(!record.completed);
    }

    #[test]
    fn completion_tracks_question_count() {
        let mut record = ScoreRecord::fresh(key());
        for points in [1_000, 500, 0, 800] {
            record.push_score(points, 5);
            assert!(!record.completed);
        }
        record.push_score(300, 5);
        assert!(record.completed);
        assert_eq!(record.total(), 2_600);
    }

    #[test]
    fn serde_round_trip_preserves_order() {
        let mut record = ScoreRecord::fresh(key());
        record.push_score(1_000, 5);
        record.push_score(500, 5);
        let json = serde_json::to_string(&record).unwrap();
        let back: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.scores.as_slice(), &[1_000, 500]);
    }

    #[test]
    fn missing_completed_field_defaults_to_open() {
        let back: ScoreRecord =
            serde_json::from_str(r#"{"date":"2026_08_26","scores":[1000,500]}"#).unwrap();
        assert!(!back.completed);
        assert_eq!(back.answered(), 2);
    }
}
