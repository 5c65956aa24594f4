//! Shared modal frame used by every header popup.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Whether a keydown inside the dialog should close it.
pub fn closes_popup(key: &str) -> bool {
    key == "Escape"
}

/// Backdrop + dialog with a title bar and close button.
///
/// Clicking the backdrop, the close button, or pressing Escape runs `on_close`.
/// The dialog takes focus on mount so Escape works before anything inside it
/// is clicked.
#[component]
pub fn Popup(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let dialog_ref = NodeRef::<Div>::new();
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if closes_popup(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            if let Err(e) = dialog.focus() {
                leptos::logging::warn!("popup focus failed: {e:?}");
            }
        }
    });

    view! {
        <div class="popup__backdrop" on:click=on_backdrop>
            <div
                class="popup"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="-1"
            >
                <div class="popup__header">
                    <strong class="popup__title">{title}</strong>
                    <button class="popup__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <div class="popup__content">{children()}</div>
            </div>
        </div>
    }
}
