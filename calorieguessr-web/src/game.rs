//! Web-specific game engine implementation
//!
//! This module provides browser-backed implementations of the
//! calorieguessr-game traits and re-exports the core game logic types.

use crate::dom;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

// Re-export all types from calorieguessr-game
pub use calorieguessr_game::*;

use calorieguessr_game::constants::{SCORE_RECORD_PREFIX, SCORE_RECORD_RETENTION_DAYS};

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("cookies unavailable: {0}")]
    Unavailable(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebStorageError {
    #[cfg(target_arch = "wasm32")]
    fn from_js(value: &JsValue) -> Self {
        Self::Unavailable(dom::js_error_message(value))
    }
}

/// Score record store backed by `document.cookie`, one cookie per day
/// named `calorieguessr.score_<DayKey>`, expiring after one day.
///
/// Writes are synchronous, so a record saved on guess is visible to any
/// read in the same tick. Corrupted payloads read as absent; the session
/// simply starts fresh.
#[derive(Clone, Copy, Default)]
pub struct CookieScoreStore;

impl CookieScoreStore {
    fn cookie_name(key: &DayKey) -> String {
        format!("{SCORE_RECORD_PREFIX}_{key}")
    }
}

impl SessionStore for CookieScoreStore {
    type Error = WebStorageError;

    #[cfg(not(target_arch = "wasm32"))]
    fn load(&self, _key: &DayKey) -> Result<Option<ScoreRecord>, Self::Error> {
        // No cookie jar outside the browser; behave as always fresh.
        Ok(None)
    }

    #[cfg(target_arch = "wasm32")]
    fn load(&self, key: &DayKey) -> Result<Option<ScoreRecord>, Self::Error> {
        let jar = dom::read_cookies().map_err(|err| WebStorageError::from_js(&err))?;
        let name_eq = format!("{}=", Self::cookie_name(key));
        for entry in jar.split(';') {
            let Some(raw) = entry.trim_start().strip_prefix(&name_eq) else {
                continue;
            };
            let Ok(decoded) = js_sys::decode_uri_component(raw).map(String::from) else {
                log::warn!("undecodable score cookie for {key}");
                return Ok(None);
            };
            return match serde_json::from_str::<ScoreRecord>(&decoded) {
                Ok(record) => Ok(Some(record)),
                Err(err) => {
                    log::warn!("corrupt score cookie for {key}: {err}");
                    Ok(None)
                }
            };
        }
        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self, _record: &ScoreRecord) -> Result<(), Self::Error> {
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    fn save(&self, record: &ScoreRecord) -> Result<(), Self::Error> {
        let json = serde_json::to_string(record)?;
        let encoded = String::from(js_sys::encode_uri_component(&json));
        let max_age = SCORE_RECORD_RETENTION_DAYS * 86_400;
        let cookie = format!(
            "{}={encoded}; Max-Age={max_age}; Path=/",
            Self::cookie_name(&record.date)
        );
        dom::write_cookie(&cookie).map_err(|err| WebStorageError::from_js(&err))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn clear_all(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    fn clear_all(&self) -> Result<(), Self::Error> {
        let jar = dom::read_cookies().map_err(|err| WebStorageError::from_js(&err))?;
        for entry in jar.split(';') {
            let name = entry.trim().split('=').next().unwrap_or_default();
            if name.starts_with(SCORE_RECORD_PREFIX) {
                dom::write_cookie(&format!("{name}=; Max-Age=0; Path=/"))
                    .map_err(|err| WebStorageError::from_js(&err))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("network error: {0}")]
    Network(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Question source over a daily game document fetched ahead of time by
/// the bootstrap.
#[derive(Clone, Default)]
pub struct PrefetchedQuestions(pub Option<DailyGame>);

impl QuestionSource for PrefetchedQuestions {
    type Error = WebDataError;

    fn load_daily_game(&self, key: &DayKey) -> Result<Option<DailyGame>, Self::Error> {
        Ok(self.0.clone().filter(|game| game.date == *key))
    }
}

/// Fetch the daily game document for one day from the static document
/// set published next to the app.
///
/// # Errors
///
/// Returns an error when the fetch fails or the document does not parse;
/// a 404 response is `Ok(None)` ("no game available for this date").
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_daily_game(key: &DayKey) -> Result<Option<DailyGame>, WebDataError> {
    let url = format!("games/{key}.json");
    let response = dom::fetch_response(&url)
        .await
        .map_err(|err| WebDataError::Network(dom::js_error_message(&err)))?;
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(WebDataError::Network(format!(
            "unexpected status {} for {url}",
            response.status()
        )));
    }
    let body = dom::response_text(&response)
        .await
        .map_err(|err| WebDataError::Network(dom::js_error_message(&err)))?;
    DailyGame::from_json(&body).map(Some).map_err(WebDataError::Json)
}

/// Create a web-compatible game engine over a prefetched document and
/// the cookie-backed score store.
#[must_use]
pub fn create_web_game_engine(
    game: Option<DailyGame>,
) -> GameEngine<PrefetchedQuestions, CookieScoreStore> {
    GameEngine::new(PrefetchedQuestions(game), CookieScoreStore)
}
