mod final_score;
mod home;
mod past_games;
mod play;
mod unavailable;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use yew::prelude::*;

pub use final_score::render_final_score;
pub use home::render_home;
pub use past_games::render_past_games;
pub use play::render_play;
pub use unavailable::render_unavailable;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers) -> Html {
    match *state.phase {
        Phase::Boot => html! {
            <div class="boot">
                <p>{ "Loading today's game…" }</p>
            </div>
        },
        Phase::Home => render_home(state, handlers),
        Phase::Playing => render_play(state, handlers),
        Phase::FinalScore => render_final_score(state, handlers),
        Phase::PastGames => render_past_games(state, handlers),
        Phase::Unavailable => render_unavailable(state, handlers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::FrameLoopHandle;
    use crate::game::{
        CookieScoreStore, DailyGame, DayKey, GameSession, GuessOutcome, Question, ScoreRecord,
    };
    use futures::executor::block_on;
    use std::str::FromStr;
    use yew::LocalServerRenderer;

    #[derive(Properties, Clone)]
    struct PhaseHarnessProps {
        phase: Phase,
        session: Option<GameSession<CookieScoreStore>>,
        last_outcome: Option<GuessOutcome>,
        displayed_score: i32,
        pending_points: Option<i32>,
        load_error: Option<String>,
        past_days: Option<Vec<DayKey>>,
    }

    impl PartialEq for PhaseHarnessProps {
        fn eq(&self, other: &Self) -> bool {
            self.phase == other.phase && self.displayed_score == other.displayed_score
        }
    }

    #[function_component(PhaseHarness)]
    fn phase_harness(props: &PhaseHarnessProps) -> Html {
        let app_state = AppState {
            phase: use_state(|| props.phase),
            day_key: use_state(|| Some(day())),
            session: use_mut_ref(|| props.session.clone()),
            guess_input: use_state(|| AttrValue::from("")),
            last_outcome: use_state(|| props.last_outcome.clone()),
            displayed_score: use_state(|| props.displayed_score),
            pending_points: use_state(|| props.pending_points),
            load_error: use_state(|| props.load_error.clone()),
            past_days: use_state(|| props.past_days.clone()),
            show_admin: use_state(|| false),
            drain_loop: use_mut_ref(|| None::<FrameLoopHandle>),
        };
        let handlers = AppHandlers::new(&app_state);
        render_main_view(&app_state, &handlers)
    }

    fn day() -> DayKey {
        DayKey::from_str("2026_08_26").unwrap()
    }

    fn fixture_game() -> DailyGame {
        DailyGame {
            date: day(),
            questions: vec![
                Question {
                    name: "Baconator".into(),
                    calories: 960,
                    image_url: String::from("img/baconator.jpg"),
                },
                Question {
                    name: "McFlurry".into(),
                    calories: 510,
                    image_url: String::new(),
                },
            ],
        }
    }

    fn fresh_session() -> GameSession<CookieScoreStore> {
        GameSession::start(fixture_game(), None, CookieScoreStore)
    }

    fn render_phase(props: PhaseHarnessProps) -> String {
        block_on(LocalServerRenderer::<PhaseHarness>::with_props(props).render())
    }

    fn base_props(phase: Phase) -> PhaseHarnessProps {
        PhaseHarnessProps {
            phase,
            session: None,
            last_outcome: None,
            displayed_score: 0,
            pending_points: None,
            load_error: None,
            past_days: None,
        }
    }

    #[test]
    fn boot_shows_loading_message() {
        let html = render_phase(base_props(Phase::Boot));
        assert!(html.contains("Loading"));
    }

    #[test]
    fn home_offers_play_for_fresh_session() {
        let mut props = base_props(Phase::Home);
        props.session = Some(fresh_session());
        let html = render_phase(props);
        assert!(html.contains("Play"));
        assert!(!html.contains("Come back tomorrow"));
    }

    #[test]
    fn home_locks_out_completed_day() {
        let mut record = ScoreRecord::fresh(day());
        record.scores.extend([1000, 500]);
        record.completed = true;
        let session = GameSession::start(fixture_game(), Some(record), CookieScoreStore);

        let mut props = base_props(Phase::Home);
        props.session = Some(session);
        let html = render_phase(props);
        assert!(html.contains("Come back tomorrow"));
        assert!(html.contains("View results"));
    }

    #[test]
    fn playing_shows_question_and_input() {
        let mut session = fresh_session();
        session.begin();
        let mut props = base_props(Phase::Playing);
        props.session = Some(session);
        let html = render_phase(props);
        assert!(html.contains("Question 1 / 2"));
        assert!(html.contains("Baconator"));
        assert!(html.contains("Guess"));
    }

    #[test]
    fn playing_reveals_answer_after_guess() {
        let mut session = fresh_session();
        session.begin();
        let outcome = session.submit_guess("900", 0.0).unwrap();
        let mut props = base_props(Phase::Playing);
        props.last_outcome = Some(outcome);
        props.session = Some(session);
        let html = render_phase(props);
        assert!(html.contains("960 calories"));
        assert!(html.contains("You guessed 900 (940 points)"));
        // Drain has not settled, so Next stays disabled.
        assert!(html.contains("disabled"));
    }

    #[test]
    fn final_score_shows_total_and_bubbles() {
        let mut record = ScoreRecord::fresh(day());
        record.scores.extend([1000, 500]);
        record.completed = true;
        let session = GameSession::start(fixture_game(), Some(record), CookieScoreStore);

        let mut props = base_props(Phase::FinalScore);
        props.session = Some(session);
        let html = render_phase(props);
        assert!(html.contains("Final score"));
        assert!(html.contains("1500"));
    }

    #[test]
    fn past_games_probe_shows_progress() {
        let html = render_phase(base_props(Phase::PastGames));
        assert!(html.contains("Looking for past games"));
    }

    #[test]
    fn past_games_lists_found_days() {
        let mut props = base_props(Phase::PastGames);
        props.past_days = Some(vec![
            DayKey::from_str("2026_08_25").unwrap(),
            DayKey::from_str("2026_08_23").unwrap(),
        ]);
        let html = render_phase(props);
        assert!(html.contains("2026-08-25"));
        assert!(html.contains("2026-08-23"));
        assert!(html.contains("Back"));
    }

    #[test]
    fn past_games_reports_empty_window() {
        let mut props = base_props(Phase::PastGames);
        props.past_days = Some(Vec::new());
        let html = render_phase(props);
        assert!(html.contains("No past games found"));
    }

    #[test]
    fn home_offers_past_games() {
        let mut props = base_props(Phase::Home);
        props.session = Some(fresh_session());
        let html = render_phase(props);
        assert!(html.contains("Past games"));
    }

    #[test]
    fn unavailable_shows_error_and_retry() {
        let mut props = base_props(Phase::Unavailable);
        props.load_error = Some(String::from("No questions available for 2026-08-26"));
        let html = render_phase(props);
        assert!(html.contains("No questions available for 2026-08-26"));
        assert!(html.contains("Retry"));
    }
}
