//! Daily game data model.

use crate::date_key::DayKey;
use serde::{Deserialize, Serialize};

/// One food item the player guesses the calories of.
///
/// `calories` is the ground truth and is never shown before a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub name: String,
    pub calories: i32,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

/// The fixed, ordered question set assigned to one calendar date.
/// Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGame {
    pub date: DayKey,
    #[serde(rename = "foods")]
    pub questions: Vec<Question>,
}

impl DailyGame {
    /// Parse a daily game document from its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the document shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
