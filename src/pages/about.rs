//! About page under the site header.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="about-page">
            <h1>"About Share"</h1>
            <p>
                "Share is a simple way to send files to anyone. Uploads are kept for 30 days "
                "and can be up to 5GB."
            </p>
        </main>
    }
}
