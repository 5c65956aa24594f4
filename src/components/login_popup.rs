//! Sign-in popup offered to anonymous visitors.

use leptos::prelude::*;

use crate::components::popup::Popup;

/// Sign-in itself happens on the account service; this popup hands off to it.
#[component]
pub fn LoginPopup(on_close: Callback<()>) -> impl IntoView {
    view! {
        <Popup title="Sign In" on_close=on_close>
            <p class="login__text">"Sign in to keep track of your uploads across devices."</p>
            <a href="/login" class="btn btn--primary login__continue">
                "Continue to sign in"
            </a>
        </Popup>
    }
}
