use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::models::ChatEntry;
use crate::state::AppState;
use crate::transcript;

/// Chat panel: the transcript plus the input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let entries = state.entries;

    let container = NodeRef::<html::Div>::new();

    // Keep the newest entry visible after every append or resolution.
    Effect::new(move |_| {
        entries.track();
        if let Some(el) = container.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <section class="chat-panel">
            <div class="chat-box" node_ref=container>
                {move || {
                    if entries.get().is_empty() {
                        Some(view! {
                            <div class="empty-state">
                                "Upload a document and ask a question about it"
                            </div>
                        })
                    } else {
                        None
                    }
                }}
                // Keyed by the full entry so a placeholder that turns
                // into a failure notice re-renders.
                <For each=move || entries.get() key=|entry| entry.clone() let:entry>
                    <EntryBubble entry=entry />
                </For>
            </div>
            <ChatInput />
        </section>
    }
}

/// A single transcript bubble.
#[component]
fn EntryBubble(entry: ChatEntry) -> impl IntoView {
    match entry {
        ChatEntry::User { text, .. } => view! {
            <div class="chat-message user-message">
                <div class="bubble">{text}</div>
            </div>
        }
        .into_any(),
        ChatEntry::Pending { .. } => view! {
            <div class="chat-message bot-message">
                <div class="bubble">"Thinking..."</div>
            </div>
        }
        .into_any(),
        ChatEntry::Bot { text, sources, .. } => {
            let sources_line = transcript::format_sources(&sources);
            view! {
                <div class="chat-message bot-message">
                    <div class="bubble">
                        // `answer` renders newlines as line breaks (pre-line).
                        <div class="answer">{text}</div>
                        {sources_line.map(|line| view! { <div class="sources-small">{line}</div> })}
                    </div>
                </div>
            }
            .into_any()
        }
        ChatEntry::Failed { message, .. } => view! {
            <div class="chat-message bot-message">
                <div class="bubble error-text">{message}</div>
            </div>
        }
        .into_any(),
    }
}

/// Chat input row with text field and send button.
///
/// The field stays enabled while requests are in flight: sends are
/// independent and may overlap.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let send = move || {
        let raw = input.get_untracked();
        if transcript::normalize_query(&raw).is_some() {
            set_input.set(String::new());
            state.send_message(&raw);
        }
    };

    let send_on_key = send.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_on_key();
        }
    };

    let on_click = move |_| {
        send();
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <input
                    type="text"
                    placeholder="Ask a question about your documents…"
                    prop:value=input
                    on:input=move |ev| {
                        set_input.set(event_target_value(&ev));
                    }
                    on:keydown=on_keydown
                />
                <button class="send-btn" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
