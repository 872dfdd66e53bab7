//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Notecast"</h1>
            <p class="subtitle">
                "Turn your notes, lectures, and PDFs into AI-generated podcast conversations."
            </p>
        </div>
    }
}
