//! Account settings popup for a signed-in user.

use leptos::prelude::*;

use crate::components::popup::Popup;
use crate::net::types::SessionUser;

#[component]
pub fn AccountPopup(user: Option<SessionUser>, on_close: Callback<()>) -> impl IntoView {
    let name = user.as_ref().map_or_else(|| "—".to_owned(), SessionUser::full_name);
    let email = user.and_then(|u| u.email).unwrap_or_else(|| "—".to_owned());

    view! {
        <Popup title="Account Settings" on_close=on_close>
            <div class="account__row">
                <span class="account__label">"Name"</span>
                <span class="account__value">{name}</span>
            </div>
            <div class="account__row">
                <span class="account__label">"Email"</span>
                <span class="account__value">{email}</span>
            </div>
        </Popup>
    }
}
