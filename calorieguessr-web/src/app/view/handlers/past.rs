use yew::prelude::*;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::game::DayKey;

/// Open the past-games browser. The static document set has no listing
/// endpoint, so availability is discovered by probing the previous days'
/// documents once and caching the result for the session.
pub fn build_open_past_games(state: &AppState) -> Callback<MouseEvent> {
    let state = state.clone();
    Callback::from(move |_| {
        state.phase.set(Phase::PastGames);
        if (*state.past_days).is_some() {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::game::constants::PAST_GAMES_WINDOW_DAYS;

            // Derived fresh: after a replay `day_key` holds the replayed
            // day, which must not shift the probe window.
            let today = DayKey::today_in(chrono::Utc::now(), &chrono::Local);
            let past_days = state.past_days.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut found = Vec::new();
                for key in today.previous_days(PAST_GAMES_WINDOW_DAYS) {
                    match crate::game::fetch_daily_game(&key).await {
                        Ok(Some(_)) => found.push(key),
                        Ok(None) => {}
                        Err(err) => log::warn!("past game probe failed for {key}: {err}"),
                    }
                }
                past_days.set(Some(found));
            });
        }
    })
}

/// Replay an earlier day: reset the per-question state and run that
/// day's document through the regular boot path.
pub fn build_replay_day(state: &AppState) -> Callback<DayKey> {
    let state = state.clone();
    Callback::from(move |key: DayKey| {
        *state.drain_loop.borrow_mut() = None;
        state.guess_input.set(AttrValue::from(""));
        state.last_outcome.set(None);
        state.pending_points.set(None);
        state.day_key.set(Some(key.clone()));
        state.phase.set(Phase::Boot);
        #[cfg(target_arch = "wasm32")]
        {
            let handles = crate::app::bootstrap::handles_from_state(&state);
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = crate::game::fetch_daily_game(&key).await;
                crate::app::bootstrap::apply_loaded(&handles, &key, fetched);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = key;
    })
}
