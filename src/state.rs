use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use crate::api::{self, ApiError};
use crate::models::{ChatEntry, UploadStatus};
use crate::transcript;

// Entry ids must stay unique for the lifetime of the page; a counter
// cannot collide under rapid sends the way timestamp ids can.
static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(0);

fn next_entry_id() -> u64 {
    NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed)
}

/// Shared application state, provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub entries: ReadSignal<Vec<ChatEntry>>,
    pub upload_status: ReadSignal<UploadStatus>,

    // --- Write signals (for mutating state) ---
    pub set_entries: WriteSignal<Vec<ChatEntry>>,
    pub set_upload_status: WriteSignal<UploadStatus>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (entries, set_entries) = signal(Vec::<ChatEntry>::new());
        let (upload_status, set_upload_status) = signal(UploadStatus::default());

        let state = Self {
            entries,
            upload_status,
            set_entries,
            set_upload_status,
        };

        provide_context(state.clone());
        state
    }

    /// Send a question to the QA endpoint.
    ///
    /// Whitespace-only input is ignored entirely. Each call is fully
    /// independent: concurrent sends may overlap, and each one
    /// resolves its own placeholder in whatever order the responses
    /// arrive, while user/placeholder entries appear in invocation
    /// order.
    pub fn send_message(&self, raw: &str) {
        let Some(query) = transcript::normalize_query(raw) else {
            return;
        };

        let user_id = next_entry_id();
        let pending_id = next_entry_id();
        self.set_entries.update(|entries| {
            transcript::push_user(entries, user_id, query.clone());
            transcript::push_pending(entries, pending_id);
        });

        let set_entries = self.set_entries;
        spawn_local(async move {
            match api::ask(&query).await {
                Ok(response) => {
                    set_entries.update(|entries| {
                        transcript::resolve(entries, pending_id, response);
                    });
                }
                Err(err) => {
                    log::error!("Ask request failed: {err}");
                    let message = match err {
                        ApiError::Rejected { message, .. } => format!("Error: {message}"),
                        _ => "Error communicating with AI.".to_string(),
                    };
                    set_entries.update(|entries| {
                        transcript::fail(entries, pending_id, message);
                    });
                }
            }
        });
    }

    /// Upload the form's fields as multipart data.
    ///
    /// `on_success` runs only after a confirmed upload; the upload
    /// panel uses it to reset its form, leaving the fields untouched
    /// on failure so the user can retry.
    pub fn upload_document(&self, payload: FormData, on_success: impl FnOnce() + 'static) {
        self.set_upload_status.set(UploadStatus::Processing);

        let set_status = self.set_upload_status;
        spawn_local(async move {
            match api::upload_document(payload).await {
                Ok(message) => {
                    on_success();
                    set_status.set(UploadStatus::Succeeded(message));
                }
                Err(ApiError::Rejected { message, .. }) => {
                    log::error!("Upload rejected: {message}");
                    set_status.set(UploadStatus::Failed(format!("Error: {message}")));
                }
                Err(err) => {
                    log::error!("Upload failed: {err}");
                    set_status.set(UploadStatus::Failed("Network Error".to_string()));
                }
            }
        });
    }
}
