//! YouTube link field component.
//!
//! Free-text input for the optional video source. The value is held in a
//! component-local signal; no validation happens at this layer.

use leptos::*;

#[component]
pub fn YoutubeLinkField() -> impl IntoView {
    let (link, set_link) = create_signal(String::new());

    view! {
        <div class="youtube-field">
            <input
                type="text"
                id="youtubeLink"
                placeholder="Paste YouTube video link..."
                prop:value=link
                on:input=move |ev| set_link.set(event_target_value(&ev))
            />
        </div>
    }
}
