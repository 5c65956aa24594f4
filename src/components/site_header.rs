//! Site header with navigation links and the session-dependent action icon.

use leptos::prelude::*;

use crate::components::account_popup::AccountPopup;
use crate::components::login_popup::LoginPopup;
use crate::state::session::{SessionPopup, SessionState};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = RwSignal::new(SessionState::default());
    let popup = RwSignal::new(SessionPopup::None);

    on_cleanup(move || {
        session.try_update(SessionState::retire);
    });

    // Probe the session once per mount.
    let ticket = session.try_update(SessionState::begin_probe).flatten();
    #[cfg(feature = "hydrate")]
    if let Some(ticket) = ticket {
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_session_user().await;
            session.try_update(|s| s.resolve(ticket, outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;

    let close_popup = Callback::new(move |()| popup.set(SessionPopup::None));
    let action_icon = move || {
        let action = session.with(SessionState::action);
        let title = session.with(SessionState::action_title);
        view! {
            <div
                class="site-header__icon"
                title=title
                on:click=move |_| popup.set(action.popup())
            >
                {action.glyph()}
            </div>
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__home">
                <img src="/images/icon.svg" alt="Share" width="28" height="28"/>
            </a>
            <nav>
                <HeaderLink title="About" url="/about"/>
                <HeaderLink title="Support" url="/support"/>
                <HeaderLink title="Premium" url="/premium"/>
                {action_icon}
            </nav>
        </header>
        <Show when=move || popup.get() == SessionPopup::Account>
            <AccountPopup user=session.with_untracked(|s| s.user.clone()) on_close=close_popup/>
        </Show>
        <Show when=move || popup.get() == SessionPopup::Login>
            <LoginPopup on_close=close_popup/>
        </Show>
    }
}

#[component]
fn HeaderLink(title: &'static str, url: &'static str) -> impl IntoView {
    view! {
        <a href=url class="site-header__link" draggable="false">
            {title}
        </a>
    }
}
