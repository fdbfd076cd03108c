use yew::prelude::*;

use crate::app::state::AppState;
use crate::game::{CookieScoreStore, SessionStore};

pub fn build_toggle_admin(state: &AppState) -> Callback<bool> {
    let show_admin = state.show_admin.clone();
    Callback::from(move |open| show_admin.set(open))
}

/// Wipe every stored score record. Leaves the in-memory session alone;
/// the next visit starts fresh.
pub fn build_clear_records(state: &AppState) -> Callback<MouseEvent> {
    let show_admin = state.show_admin.clone();
    Callback::from(move |_| {
        if let Err(err) = CookieScoreStore.clear_all() {
            log::warn!("failed to clear score records: {err}");
        }
        show_admin.set(false);
    })
}
