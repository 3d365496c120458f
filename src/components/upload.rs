use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use web_sys::FormData;

use crate::models::UploadStatus;
use crate::state::AppState;

/// Document upload form plus its status region.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let status = state.upload_status;

    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            return;
        };
        let Ok(payload) = FormData::new_with_form(&form) else {
            log::error!("Could not read the upload form");
            return;
        };
        // The form is only reset once the server has confirmed the
        // upload; on failure the fields keep their values for a retry.
        state.upload_document(payload, move || form.reset());
    };

    view! {
        <section class="upload-panel">
            <h2>"Upload a document"</h2>
            <form node_ref=form_ref on:submit=on_submit>
                <input type="file" name="file" accept=".pdf" required=true />
                <button type="submit" class="upload-btn">
                    "Upload"
                </button>
            </form>
            <div class="upload-status">
                {move || {
                    let (css_class, text) = match status.get() {
                        UploadStatus::Idle => return None,
                        UploadStatus::Processing => (
                            "status-info",
                            "Processing document... this may take a moment.".to_string(),
                        ),
                        UploadStatus::Succeeded(message) => ("status-success", message),
                        UploadStatus::Failed(message) => ("status-error", message),
                    };
                    Some(view! { <div class=css_class>{text}</div> })
                }}
            </div>
        </section>
    }
}
