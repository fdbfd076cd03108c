use yew::prelude::*;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::game::Advance;

/// Continue past a revealed answer, either to the next question or to
/// the final score screen. Refused while the drain is still running.
pub fn build_advance(state: &AppState) -> Callback<MouseEvent> {
    let state = state.clone();
    Callback::from(move |_| {
        let (step, total) = {
            let mut slot = state.session.borrow_mut();
            let Some(sess) = slot.as_mut() else {
                return;
            };
            let step = match sess.advance() {
                Ok(step) => step,
                Err(err) => {
                    log::debug!("advance refused: {err}");
                    return;
                }
            };
            (step, sess.cumulative_score())
        };
        *state.drain_loop.borrow_mut() = None;
        state.guess_input.set(AttrValue::from(""));
        state.last_outcome.set(None);
        state.pending_points.set(None);
        state.displayed_score.set(total);
        match step {
            Advance::NextQuestion { .. } => {}
            Advance::Completed => state.phase.set(Phase::FinalScore),
        }
    })
}
