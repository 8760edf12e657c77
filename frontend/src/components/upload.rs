//! Upload widget: drop-zone, preview, prediction and result.
//!
//! The component owns one [`WidgetState`] signal and drives it through
//! its transitions. Selecting a file immediately creates the preview and
//! submits the prediction request.

use leptos::*;
use web_sys::File;

use crate::components::{DropZone, ResultTable};
use crate::config::api_url;
use crate::services::{classify_image, create_preview, release_preview};
use crate::state::{Phase, WidgetState};

/// Record a selection and, for a file, submit it right away.
fn select_file(state: RwSignal<WidgetState<File>>, file: Option<File>) {
    let mut released = None;
    state.update(|s| released = s.select_file(file.clone()));
    release_preview(released);

    let Some(file) = file else {
        log::info!("🧹 Selection cleared");
        return;
    };

    let preview = match create_preview(&file) {
        Ok(url) => url,
        Err(e) => {
            log::error!("❌ {}", e);
            state.update(|s| s.fail());
            return;
        }
    };

    let mut replaced = None;
    let mut ticket = None;
    state.update(|s| {
        replaced = s.attach_preview(preview);
        ticket = s.begin_submit();
    });
    release_preview(replaced);

    let Some(ticket) = ticket else {
        return;
    };

    // Read at call time so every request uses the configured endpoint
    let endpoint = api_url();
    spawn_local(async move {
        let outcome = classify_image(&file, endpoint).await;
        if let Err(e) = &outcome {
            log::error!("❌ Prediction failed: {}", e);
        }

        let mut applied = false;
        state.update(|s| applied = s.complete(ticket, outcome));
        if !applied {
            log::debug!("Dropped response for superseded selection {}", file.name());
        }
    });
}

#[component]
pub fn UploadWidget() -> impl IntoView {
    let state = create_rw_signal(WidgetState::<File>::new());

    let on_pick = Callback::new(move |file: Option<File>| select_file(state, file));

    let on_clear = move |_| {
        let mut released = None;
        state.update(|s| released = s.clear());
        release_preview(released);
    };

    on_cleanup(move || {
        let current = state.try_with_untracked(|s| s.preview().map(str::to_string));
        release_preview(current.flatten());
    });

    let phase = move || state.with(|s| s.phase());

    view! {
        <div class="grid-container">
            <div
                class="image-card"
                class:image-card-empty=move || state.with(|s| s.shows_dropzone())
            >
                <Show
                    when=move || state.with(|s| s.shows_preview())
                    fallback=move || view! { <DropZone on_pick=on_pick/> }
                >
                    <img
                        class="media"
                        src=move || state.with(|s| s.preview().unwrap_or_default().to_string())
                        alt="Fish Image"
                        title="Fish Image"
                    />
                </Show>

                {move || {
                    state
                        .with(|s| s.result().cloned())
                        .map(|result| view! { <ResultTable result=result/> })
                }}

                <Show
                    when=move || phase() == Phase::Loading
                    fallback=|| view! { }
                >
                    <div class="loader">
                        <div class="spinner"></div>
                    </div>
                </Show>

                <Show
                    when=move || phase() == Phase::Error
                    fallback=|| view! { }
                >
                    <p class="error-message">
                        {move || state.with(|s| s.error().unwrap_or_default().to_string())}
                    </p>
                </Show>
            </div>

            <Show
                when=move || matches!(phase(), Phase::Result | Phase::Error)
                fallback=|| view! { }
            >
                <div class="button-grid">
                    <button class="clear-button" on:click=on_clear>
                        "✕ Clear Data"
                    </button>
                </div>
            </Show>
        </div>
    }
}
