use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::button::Button;
use yew::prelude::*;

/// Browse the previous days that still have a published game document
/// and replay any of them.
pub fn render_past_games(state: &AppState, handlers: &AppHandlers) -> Html {
    let body = match (*state.past_days).as_ref() {
        None => html! { <p class="probing">{ "Looking for past games…" }</p> },
        Some(days) if days.is_empty() => html! {
            <p class="none-found">{ "No past games found." }</p>
        },
        Some(days) => html! {
            <ul class="past-days">
                { for days.iter().map(|day| {
                    let onclick = {
                        let replay = handlers.replay_day.clone();
                        let day = day.clone();
                        Callback::from(move |_| replay.emit(day.clone()))
                    };
                    html! {
                        <li>
                            <Button label={day.hyphenated()} onclick={onclick} />
                        </li>
                    }
                }) }
            </ul>
        },
    };

    html! {
        <div class="past-games">
            <h2>{ "Past games" }</h2>
            { body }
            <Button label="Back" onclick={handlers.back_home.clone()} />
        </div>
    }
}
