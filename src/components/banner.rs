//! One-shot dismissible announcement strip.

use leptos::prelude::*;

use crate::state::banner::BannerState;

/// Banner showing `children` with a close affordance.
///
/// Dismissal lasts for the rest of the mount; only remounting the parent
/// brings it back.
#[component]
pub fn Banner(children: ChildrenFn) -> impl IntoView {
    let banner = RwSignal::new(BannerState::default());
    let on_dismiss = move |_| {
        banner.update(|b| {
            b.dismiss();
        });
    };

    view! {
        <Show when=move || banner.get().is_visible()>
            <div class="banner">
                {children()}
                <div class="banner__close" title="Dismiss" on:click=on_dismiss>
                    "✕"
                </div>
            </div>
        </Show>
    }
}
