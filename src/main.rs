mod api;
mod components;
mod models;
mod state;
mod transcript;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatPanel;
use components::upload::UploadPanel;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    AppState::provide();

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Document Chat"</h1>
            </header>
            <UploadPanel />
            <ChatPanel />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
