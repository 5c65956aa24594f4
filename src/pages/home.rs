//! Upload page: the application header over the upload area.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppHeader/>
        <main class="upload-page">
            <h1 class="upload-page__title">"Share"</h1>
            <p class="upload-page__hint">"Drop files anywhere to upload."</p>
        </main>
    }
}
