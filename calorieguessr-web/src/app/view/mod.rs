mod handlers;
mod phases;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = phases::render_main_view(state, &handlers);

    let open_admin = {
        let toggle = handlers.toggle_admin.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(true))
    };
    let close_admin = {
        let toggle = handlers.toggle_admin.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(false))
    };

    let admin_panel = if *state.show_admin {
        html! {
            <div class="admin-panel" role="dialog">
                <p>{ "Admin" }</p>
                <button onclick={handlers.clear_records.clone()}>{ "Clear saved scores" }</button>
                <button onclick={close_admin}>{ "Close" }</button>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <main id="main" role="main">
            { main_view }
            { admin_panel }
            <footer class="app-footer">
                <button class="admin-open" onclick={open_admin}>{ "\u{2699}" }</button>
            </footer>
        </main>
    }
}
