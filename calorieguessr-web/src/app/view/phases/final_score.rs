use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::button::Button;
use crate::components::score_bubble::ScoreBubble;
use yew::prelude::*;

pub fn render_final_score(state: &AppState, handlers: &AppHandlers) -> Html {
    let total = state
        .session
        .borrow()
        .as_ref()
        .map_or(0, |sess| sess.cumulative_score());
    let scores = state.scores();

    html! {
        <div class="final-score">
            <h2>{ "Final score" }</h2>
            <p class="score-total">{ total }</p>
            <div class="score-bubbles">
                { for scores.iter().map(|points| html! { <ScoreBubble points={*points} /> }) }
            </div>
            <Button label="Home" onclick={handlers.back_home.clone()} />
        </div>
    }
}
