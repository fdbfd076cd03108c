use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::button::Button;
use crate::game::SessionBoot;
use yew::prelude::*;

pub fn render_home(state: &AppState, handlers: &AppHandlers) -> Html {
    let completed = state
        .session
        .borrow()
        .as_ref()
        .is_some_and(|sess| matches!(sess.boot(), SessionBoot::AlreadyCompleted { .. }));

    if completed {
        let view_results = {
            let phase = state.phase.clone();
            Callback::from(move |_| phase.set(Phase::FinalScore))
        };
        return html! {
            <div class="home">
                <h1>{ "CalorieGuessr" }</h1>
                <p class="come-back">{ "You already played today. Come back tomorrow!" }</p>
                <Button label="View results" onclick={view_results} />
                <Button label="Past games" onclick={handlers.open_past_games.clone()} />
            </div>
        };
    }

    html! {
        <div class="home">
            <h1>{ "CalorieGuessr" }</h1>
            <p>{ "Guess the calories of five foods. Closer guesses score more points." }</p>
            <Button label="Play" onclick={handlers.start.clone()} />
            <Button label="Past games" onclick={handlers.open_past_games.clone()} />
        </div>
    }
}
