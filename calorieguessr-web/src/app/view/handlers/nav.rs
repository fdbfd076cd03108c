use yew::prelude::*;

use crate::app::phase::Phase;
use crate::app::state::AppState;

pub fn build_back_home(state: &AppState) -> Callback<MouseEvent> {
    let phase = state.phase.clone();
    Callback::from(move |_| phase.set(Phase::Home))
}

/// Reload the page after a failed load so the whole boot path runs again.
pub fn build_retry(state: &AppState) -> Callback<MouseEvent> {
    let phase = state.phase.clone();
    let load_error = state.load_error.clone();
    Callback::from(move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::dom;
            if dom::window().location().reload().is_ok() {
                return;
            }
        }
        load_error.set(None);
        phase.set(Phase::Boot);
    })
}
