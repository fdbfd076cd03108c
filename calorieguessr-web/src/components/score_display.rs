use crate::components::score_bubble::ScoreBubble;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Score shown to the player, which lags the stored total while a
    /// drain is running.
    pub score: i32,
    /// Points still draining into the score, shown as a `+N` tag next
    /// to it.
    #[prop_or_default]
    pub pending: Option<i32>,
    /// Per-question scores answered so far, oldest first.
    #[prop_or_default]
    pub scores: Vec<i32>,
}

#[function_component(ScoreDisplay)]
pub fn score_display(p: &Props) -> Html {
    let indicator = p.pending.map(|points| {
        html! { <span class="points-gained">{ format!("+{points}") }</span> }
    });
    html! {
        <div class="score-display">
            <span class="score-total">{ p.score }</span>
            { for indicator }
            <div class="score-bubbles">
                { for p.scores.iter().map(|points| html! { <ScoreBubble points={*points} /> }) }
            </div>
        </div>
    }
}
