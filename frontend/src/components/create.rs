//! Create Podcast action.
//!
//! Submission to the generation backend lands in a later milestone; until
//! then the button has no bound behavior.

use leptos::*;

#[component]
pub fn CreatePodcastButton() -> impl IntoView {
    view! {
        <button class="btn btn-primary" id="createPodcastBtn">
            "Create Podcast +"
        </button>
    }
}
