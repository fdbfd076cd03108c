use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::app::view::handlers::drain::spawn_drain;
use crate::dom;
use yew::prelude::*;

/// `Home -> Playing`: begin a fresh session (no effect when resuming,
/// the session is already mid-game).
pub fn build_start(state: &AppState) -> Callback<MouseEvent> {
    let session = state.session.clone();
    let displayed_handle = state.displayed_score.clone();
    let phase_handle = state.phase.clone();
    Callback::from(move |_| {
        let mut slot = session.borrow_mut();
        let Some(sess) = slot.as_mut() else {
            return;
        };
        sess.begin();
        displayed_handle.set(sess.cumulative_score());
        phase_handle.set(Phase::Playing);
    })
}

pub fn build_guess_input(state: &AppState) -> Callback<InputEvent> {
    let guess_handle = state.guess_input.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            guess_handle.set(AttrValue::from(input.value()));
        }
    })
}

/// Score the typed guess, persist the record and kick off the drain.
/// Invalid input leaves every piece of state untouched.
pub fn build_submit_guess(state: &AppState) -> Callback<MouseEvent> {
    let state = state.clone();
    Callback::from(move |_| {
        let (outcome, displayed, pending) = {
            let mut slot = state.session.borrow_mut();
            let Some(sess) = slot.as_mut() else {
                return;
            };
            let outcome = match sess.submit_guess(&state.guess_input, dom::now_ms()) {
                Ok(outcome) => outcome,
                Err(err) => {
                    log::debug!("guess rejected: {err}");
                    return;
                }
            };
            (outcome, sess.displayed_score(), sess.pending_points())
        };
        state.displayed_score.set(displayed);
        state.pending_points.set(pending);
        state.last_outcome.set(Some(outcome));
        spawn_drain(&state, outcome.generation);
    })
}
