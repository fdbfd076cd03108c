use crate::app::phase::Phase;
use crate::dom::FrameLoopHandle;
use crate::game::{CookieScoreStore, DayKey, GameSession, GuessOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// The live game session, shared between render code, click handlers and
/// the animation frame loop. A `UseStateHandle` would hand the frame
/// loop a snapshot from the render that created it; the cell always
/// holds the current session. Re-renders are driven by the display
/// handles below, which change on every transition worth showing.
pub type SharedSession = Rc<RefCell<Option<GameSession<CookieScoreStore>>>>;

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    /// Day key derived once at page load; a day boundary mid-session
    /// does not shift the running game.
    pub day_key: UseStateHandle<Option<DayKey>>,
    pub session: SharedSession,
    pub guess_input: UseStateHandle<AttrValue>,
    pub last_outcome: UseStateHandle<Option<GuessOutcome>>,
    /// Visual score following the drain; authoritative score lives in
    /// the session record.
    pub displayed_score: UseStateHandle<i32>,
    pub pending_points: UseStateHandle<Option<i32>>,
    pub load_error: UseStateHandle<Option<String>>,
    /// Past days with a published question document, most recent first.
    /// `None` until the probe has run.
    pub past_days: UseStateHandle<Option<Vec<DayKey>>>,
    pub show_admin: UseStateHandle<bool>,
    /// The one live animation frame loop; replacing it cancels the
    /// previous drain.
    pub drain_loop: Rc<RefCell<Option<FrameLoopHandle>>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_state(|| Phase::Boot),
        day_key: use_state(|| None::<DayKey>),
        session: use_mut_ref(|| None::<GameSession<CookieScoreStore>>),
        guess_input: use_state(|| AttrValue::from("")),
        last_outcome: use_state(|| None::<GuessOutcome>),
        displayed_score: use_state(|| 0_i32),
        pending_points: use_state(|| None::<i32>),
        load_error: use_state(|| None::<String>),
        past_days: use_state(|| None::<Vec<DayKey>>),
        show_admin: use_state(|| false),
        drain_loop: use_mut_ref(|| None::<FrameLoopHandle>),
    }
}

impl AppState {
    /// Per-question scores of the running session, oldest first.
    #[must_use]
    pub fn scores(&self) -> Vec<i32> {
        self.session
            .borrow()
            .as_ref()
            .map(|sess| sess.record().scores.to_vec())
            .unwrap_or_default()
    }
}
