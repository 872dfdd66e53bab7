//! Drop zone component with drag & drop support.
//!
//! Both input surfaces (drag & drop and the file picker) funnel their file
//! lists into the same staging call; refused batches surface as toasts and
//! leave the staged list untouched.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, MouseEvent};

use super::toast::push_toast;
use crate::config::FILE_ACCEPT_HINT;
use crate::services::WebStagingList;
use crate::types::{Toast, ToastLevel};

#[component]
pub fn DropZone(
    set_staging: WriteSignal<WebStagingList>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);

    // Shared by the drop and file-picker paths.
    let stage_batch = move |files: Option<FileList>| {
        let Some(files) = files else { return };
        let candidates: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();

        set_staging.update(|staging| match staging.stage_files(candidates) {
            Ok(0) => {}
            Ok(count) => log::info!("📥 Staged {} file(s), {} total", count, staging.len()),
            Err(e) => {
                log::warn!("Batch refused: {}", e);
                push_toast(set_toasts, ToastLevel::Error, e.to_string());
            }
        });
    };

    // Handler for file input changes
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        stage_batch(input.files());
    };

    // Drag handlers; default behavior must stay suppressed so the browser
    // never navigates to a dropped file.
    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        stage_batch(ev.data_transfer().and_then(|dt| dt.files()));
    };

    // Handler for clicking anywhere in the zone
    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id("fileInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    view! {
        <div
            class="drop-zone"
            id="dropZone"
            class:dragging=move || is_dragging.get()
            on:click=trigger_file_input
            on:dragenter=on_drag_enter
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <p class="drop-zone-text">
                {move || if is_dragging.get() {
                    "Release to upload"
                } else {
                    "Drag & drop your PDF or images"
                }}
            </p>
            <label for="fileInput" class="drop-zone-hint">"or click to upload"</label>

            <input
                type="file"
                id="fileInput"
                accept=FILE_ACCEPT_HINT
                multiple=true
                style="display:none"
                on:click=move |ev: MouseEvent| ev.stop_propagation()
                on:change=on_file_change
            />
        </div>
    }
}
