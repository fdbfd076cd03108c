use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::button::Button;
use yew::prelude::*;

pub fn render_unavailable(state: &AppState, handlers: &AppHandlers) -> Html {
    let message = (*state.load_error)
        .clone()
        .unwrap_or_else(|| String::from("Today's game could not be loaded."));
    html! {
        <div class="unavailable">
            <p class="load-error">{ message }</p>
            <Button label="Retry" onclick={handlers.retry.clone()} />
        </div>
    }
}
