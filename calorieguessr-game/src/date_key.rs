//! Canonical day key derivation.
//!
//! Every persisted record and daily question document is scoped to one
//! calendar day. The key format is zero-padded `YYYY_MM_DD`, which keeps
//! lexicographic order identical to calendar order.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const KEY_FORMAT: &str = "%Y_%m_%d";

/// Identifier for one calendar day, e.g. `2026_08_26`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

impl DayKey {
    /// Build the key for a specific calendar date.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self(date.format(KEY_FORMAT).to_string())
    }

    /// Derive the key for the calendar day that `now` falls on in the
    /// given time zone. Pure given `(now, tz)`; callers derive it once per
    /// page load so a day boundary cannot shift mid-session.
    #[must_use]
    pub fn today_in<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> Self {
        Self::for_date(now.with_timezone(tz).date_naive())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The same date with hyphens, matching the `YYYY-MM-DD` form used by
    /// the daily game documents.
    #[must_use]
    pub fn hyphenated(&self) -> String {
        self.0.replace('_', "-")
    }

    /// The calendar date this key denotes. Keys are canonical by
    /// construction, so the parse cannot fail.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(&self.0, KEY_FORMAT).unwrap_or_default()
    }

    /// The `count` keys preceding this one, most recent first.
    #[must_use]
    pub fn previous_days(&self, count: usize) -> Vec<Self> {
        let mut keys = Vec::with_capacity(count);
        let mut date = self.date();
        for _ in 0..count {
            let Some(prev) = date.pred_opt() else { break };
            keys.push(Self::for_date(prev));
            date = prev;
        }
        keys
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected day key input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day key: {0:?}")]
pub struct InvalidDayKey(pub String);

impl FromStr for DayKey {
    type Err = InvalidDayKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, KEY_FORMAT)
            .map_err(|_| InvalidDayKey(s.to_string()))?;
        let canonical = Self::for_date(date);
        // chrono accepts unpadded month/day; only the padded form is canonical.
        if canonical.0 == s {
            Ok(canonical)
        } else {
            Err(InvalidDayKey(s.to_string()))
        }
    }
}

impl TryFrom<String> for DayKey {
    type Error = InvalidDayKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.0
    }
}
