use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::button::Button;
use crate::components::score_display::ScoreDisplay;
use yew::prelude::*;

pub fn render_play(state: &AppState, handlers: &AppHandlers) -> Html {
    let slot = state.session.borrow();
    let Some(sess) = slot.as_ref() else {
        return Html::default();
    };
    let Some(question) = sess.current_question() else {
        return Html::default();
    };

    let header = format!(
        "Question {} / {}",
        sess.question_index() + 1,
        sess.question_count()
    );

    let answer_panel = if sess.answer_revealed() {
        let outcome = (*state.last_outcome).as_ref();
        let guess = outcome.map_or(0, |o| o.guess);
        let points = outcome.map_or(0, |o| o.points);
        html! {
            <div class="answer-reveal">
                <p class="actual">{ format!("{} calories", question.calories) }</p>
                <p class="guess">{ format!("You guessed {guess} ({points} points)") }</p>
                <Button
                    label="Next"
                    onclick={handlers.advance.clone()}
                    disabled={!sess.can_advance()}
                />
            </div>
        }
    } else {
        html! {
            <div class="guess-entry">
                <input
                    type="number"
                    placeholder="Calories"
                    value={(*state.guess_input).clone()}
                    oninput={handlers.guess_input.clone()}
                />
                <Button label="Guess" onclick={handlers.submit_guess.clone()} />
            </div>
        }
    };

    html! {
        <div class="play">
            <p class="question-header">{ header }</p>
            <ScoreDisplay
                score={*state.displayed_score}
                pending={*state.pending_points}
                scores={state.scores()}
            />
            <div class="food-card">
                <img src={question.image_url.clone()} alt={question.name.clone()} />
                <p class="food-name">{ question.name.clone() }</p>
            </div>
            { answer_panel }
        </div>
    }
}
