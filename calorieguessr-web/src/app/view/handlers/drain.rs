use crate::app::state::{AppState, SharedSession};
use yew::UseStateHandle;

/// One tick of the drain loop: feed the timestamp into the live session
/// and mirror the published frame into the display handles. Returns
/// whether the loop should keep running.
///
/// The session is read through the shared cell, never through a state
/// handle: a handle cloned when the loop was created would deref to the
/// session snapshotted at that render, one generation behind the guess
/// that started this drain.
fn drain_tick(
    session: &SharedSession,
    displayed: &UseStateHandle<i32>,
    pending: &UseStateHandle<Option<i32>>,
    generation: u64,
    now_ms: f64,
) -> bool {
    let frame = {
        let mut slot = session.borrow_mut();
        let Some(sess) = slot.as_mut() else {
            return false;
        };
        sess.animation_frame(generation, now_ms)
    };
    let Some(frame) = frame else {
        return false;
    };
    displayed.set(frame.displayed_score);
    pending.set(frame.pending_points);
    // Keep ticking until the drain settles and the indicator clears.
    !(frame.settled && frame.pending_points.is_none())
}

/// Start the display-refresh loop that drives one drain cycle. The
/// previous loop's handle is dropped first, so exactly one loop is ever
/// live; a stale loop's ticks are additionally rejected by the session's
/// generation check.
#[cfg(target_arch = "wasm32")]
pub fn spawn_drain(state: &AppState, generation: u64) {
    use crate::dom;

    let session = state.session.clone();
    let displayed = state.displayed_score.clone();
    let pending = state.pending_points.clone();

    let started = dom::start_frame_loop(move |now| {
        drain_tick(&session, &displayed, &pending, generation, now)
    });

    match started {
        Ok(handle) => {
            *state.drain_loop.borrow_mut() = Some(handle);
        }
        Err(err) => dom::console_error(&dom::js_error_message(&err)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_drain(state: &AppState, generation: u64) {
    // No frame scheduler outside the browser; tests drive the ticks
    // directly.
    let _ = (state, generation);
}
