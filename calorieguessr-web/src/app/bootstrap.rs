#[cfg(any(target_arch = "wasm32", test))]
use crate::app::phase::{Phase, phase_for_session};
#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::{AppState, SharedSession};
#[cfg(any(target_arch = "wasm32", test))]
use crate::game::{DailyGame, DayKey, WebDataError, create_web_game_engine};
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
pub(crate) struct BootstrapHandles {
    phase: UseStateHandle<Phase>,
    day_key: UseStateHandle<Option<DayKey>>,
    session: SharedSession,
    displayed_score: UseStateHandle<i32>,
    load_error: UseStateHandle<Option<String>>,
}

#[cfg(any(target_arch = "wasm32", test))]
pub(crate) fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        phase: app_state.phase.clone(),
        day_key: app_state.day_key.clone(),
        session: app_state.session.clone(),
        displayed_score: app_state.displayed_score.clone(),
        load_error: app_state.load_error.clone(),
    }
}

/// Resolve the fetched daily game document into a session, the resume
/// phase, and the landing view. `Ok(None)` is the terminal
/// "no game available for this date" state.
#[cfg(any(target_arch = "wasm32", test))]
pub(crate) fn apply_loaded(
    handles: &BootstrapHandles,
    key: &DayKey,
    fetched: Result<Option<DailyGame>, WebDataError>,
) {
    let game = match fetched {
        Ok(Some(game)) => game,
        Ok(None) => {
            handles
                .load_error
                .set(Some(format!("No questions available for {}", key.hyphenated())));
            handles.phase.set(Phase::Unavailable);
            return;
        }
        Err(err) => {
            log::warn!("daily game fetch failed for {key}: {err}");
            handles.load_error.set(Some(err.to_string()));
            handles.phase.set(Phase::Unavailable);
            return;
        }
    };

    let engine = create_web_game_engine(Some(game));
    match engine.start_session(key) {
        Ok(session) => {
            handles.displayed_score.set(session.cumulative_score());
            handles.phase.set(phase_for_session(&session));
            *handles.session.borrow_mut() = Some(session);
        }
        Err(err) => {
            handles.load_error.set(Some(err.to_string()));
            handles.phase.set(Phase::Unavailable);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let key = DayKey::today_in(chrono::Utc::now(), &chrono::Local);
            log::info!("booting daily game for {key}");
            handles.day_key.set(Some(key.clone()));
            let fetched = crate::game::fetch_daily_game(&key).await;
            apply_loaded(&handles, &key, fetched);
        });
        || {}
    });
}
