//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Image Classifier"</h1>
            <p class="subtitle">
                "Upload a GIF, PNG or JPEG image. "
                "The server classifies it and returns the most likely classes with their probability."
            </p>
        </div>
    }
}
