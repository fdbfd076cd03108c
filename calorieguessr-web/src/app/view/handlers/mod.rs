mod admin;
mod advance;
mod drain;
mod guess;
mod nav;
mod past;

use crate::app::state::AppState;
use yew::prelude::*;

pub use admin::{build_clear_records, build_toggle_admin};
pub use advance::build_advance;
pub use guess::{build_guess_input, build_start, build_submit_guess};
pub use nav::{build_back_home, build_retry};
pub use past::{build_open_past_games, build_replay_day};

#[derive(Clone)]
pub struct AppHandlers {
    pub start: Callback<MouseEvent>,
    pub guess_input: Callback<InputEvent>,
    pub submit_guess: Callback<MouseEvent>,
    pub advance: Callback<MouseEvent>,
    pub back_home: Callback<MouseEvent>,
    pub retry: Callback<MouseEvent>,
    pub open_past_games: Callback<MouseEvent>,
    pub replay_day: Callback<crate::game::DayKey>,
    pub toggle_admin: Callback<bool>,
    pub clear_records: Callback<MouseEvent>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            start: build_start(state),
            guess_input: build_guess_input(state),
            submit_guess: build_submit_guess(state),
            advance: build_advance(state),
            back_home: build_back_home(state),
            retry: build_retry(state),
            open_past_games: build_open_past_games(state),
            replay_day: build_replay_day(state),
            toggle_admin: build_toggle_admin(state),
            clear_records: build_clear_records(state),
        }
    }
}
