//! Image picker with drag & drop support.
//!
//! Only images up to `MAX_FILE_SIZE` get through; anything else is
//! dropped here and never reaches the widget state.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::state::is_acceptable_image;

/// Apply the picker filter. `Err` carries a rejected file.
fn filter_pick(file: Option<File>) -> Result<Option<File>, File> {
    match file {
        Some(file) if !is_acceptable_image(&file.type_(), file.size()) => Err(file),
        pick => Ok(pick),
    }
}

#[component]
pub fn DropZone(
    /// Called with the accepted file, or `None` when the picker was emptied
    on_pick: Callback<Option<File>>,
) -> impl IntoView {
    let (dragging, set_dragging) = create_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let pick = move |file: Option<File>| match filter_pick(file) {
        Ok(file) => on_pick.call(file),
        Err(rejected) => log::warn!(
            "⚠️ Rejected {} ({}, {} bytes): not an image or too large",
            rejected.name(),
            rejected.type_(),
            rejected.size()
        ),
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Allow picking the same file again later
        input.set_value("");
        pick(file);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        pick(file);
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };

    let trigger_file_input = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class="dropzone"
            class:dragging=move || dragging.get()
            on:click=trigger_file_input
            on:dragover=on_drag_over
            on:dragleave=move |_| set_dragging.set(false)
            on:drop=on_drop
        >
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">"Drag and drop an image of a fish to predict disease"</div>
            <div class="upload-hint">"or click to select a PNG or JPG image"</div>
            <input
                type="file"
                accept="image/*"
                style="display:none"
                node_ref=input_ref
                on:change=on_file_change
            />
        </div>
    }
}
