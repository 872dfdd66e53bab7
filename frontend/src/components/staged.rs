//! Staged-file grid with per-tile removal.
//!
//! Pure projection of the staging list: image entries render their preview
//! URL, everything else gets the placeholder tile with the file name. The
//! whole section only appears while something is staged.

use leptos::*;

use crate::services::WebStagingList;
use crate::staging::UploadFile;
use crate::types::TileInfo;

#[component]
pub fn StagedGrid(
    staging: ReadSignal<WebStagingList>,
    set_staging: WriteSignal<WebStagingList>,
) -> impl IntoView {
    // Project entries into plain tile data so the view never holds raw
    // file handles.
    let tiles = move || {
        staging.with(|staging| {
            staging
                .entries()
                .iter()
                .map(|entry| TileInfo {
                    id: entry.id.clone(),
                    file_name: entry.file.file_name(),
                    preview: entry.preview.clone(),
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show
            when=move || staging.with(|staging| !staging.is_empty())
            fallback=|| view! { }
        >
            <div class="staged-section" id="stagedSection">
                <div class="staged-header">
                    <span>"Selected Files"</span>
                    <span id="stagedCount">{move || staging.with(|staging| staging.count_label())}</span>
                </div>

                <div class="staged-grid" id="stagedGrid">
                    <For
                        each=tiles
                        key=|tile| tile.id.clone()
                        children=move |tile| {
                            let remove_id = tile.id.clone();
                            let on_remove = move |_| {
                                log::info!("🗑 Removing staged file {}", remove_id);
                                set_staging.update(|staging| staging.remove(&remove_id));
                            };

                            view! {
                                <div class="staged-tile">
                                    <button class="tile-remove" on:click=on_remove>"✕"</button>
                                    {match tile.preview {
                                        Some(url) => view! {
                                            <img class="tile-preview" src=url alt="preview"/>
                                        }
                                        .into_view(),
                                        None => view! {
                                            <div class="tile-placeholder">
                                                "PDF"
                                                <span class="tile-name">{tile.file_name}</span>
                                            </div>
                                        }
                                        .into_view(),
                                    }}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
