//! Application header: announcement banner, retention notice, and the
//! history / bug-report / GitHub navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header owns `PanelState`. Opening history issues a fetch whose rows
//! are applied only if that open is still the latest one, so closing or
//! switching panels drops late responses.

use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::bug_report_popup::BugReportPopup;
use crate::components::history_popup::HistoryPopup;
use crate::state::panel::PanelState;

const RELEASES_URL: &str = "https://github.com/harveycoombs/share/releases";
const REPOSITORY_URL: &str = "https://github.com/harveycoombs/share";
const AUTHOR_URL: &str = "https://harveycoombs.com/";

#[component]
pub fn AppHeader() -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());

    on_cleanup(move || {
        panel.try_update(PanelState::retire);
    });

    let open_history = Callback::new(move |()| {
        let ticket = panel.try_update(PanelState::open_history);

        #[cfg(feature = "hydrate")]
        if let Some(ticket) = ticket {
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_history().await;
                let rows = crate::state::history::build_history_rows(
                    outcome,
                    crate::util::format::local_utc_offset_minutes,
                )
                .collect::<Vec<_>>();
                if panel.try_update(|p| p.apply_history(ticket, rows)) == Some(false) {
                    leptos::logging::log!("dropped stale upload history");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    });
    let open_bug_report = Callback::new(move |()| panel.update(PanelState::open_bug_report));
    let close_history = Callback::new(move |()| panel.update(PanelState::close_history));
    let close_bug_report = Callback::new(move |()| panel.update(PanelState::close_bug_report));

    view! {
        <header class="app-header">
            <Banner>
                <span>
                    "🎉 Share 3.0.0 is here. Check out what's changed by clicking "
                    <a href=RELEASES_URL target="_blank" class="banner__link">
                        "here"
                    </a>
                    "."
                </span>
            </Banner>
            <div class="app-header__bar">
                <strong class="app-header__credit">
                    "MADE WITH RUST BY "
                    <a href=AUTHOR_URL target="_blank" class="app-header__author">
                        "HARVEY COOMBS"
                    </a>
                </strong>
                <div class="app-header__notice">
                    "UPLOADS OLDER THAN 30 DAYS ARE DELETED · 5GB MAXIMUM UPLOAD SIZE"
                </div>
                <nav>
                    <NavItem title="View Upload History" glyph="🕘" on_click=open_history/>
                    <NavItem title="Report an Issue" glyph="🐞" on_click=open_bug_report/>
                    <NavItem title="View on GitHub" glyph="⌥" url=REPOSITORY_URL/>
                </nav>
            </div>
        </header>
        <Show when=move || panel.with(PanelState::history_open)>
            <HistoryPopup panel=panel on_close=close_history/>
        </Show>
        <Show when=move || panel.with(PanelState::bug_report_open)>
            <BugReportPopup on_close=close_bug_report/>
        </Show>
    }
}

const NAV_ITEM_CLASS: &str = "app-header__nav-item";

/// Header icon that either opens an external link or runs `on_click`.
#[component]
fn NavItem(
    title: &'static str,
    glyph: &'static str,
    #[prop(optional)] url: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    match url {
        Some(url) => view! {
            <a href=url target="_blank" class=NAV_ITEM_CLASS title=title draggable="false">
                {glyph}
            </a>
        }
        .into_any(),
        None => view! {
            <div
                class=NAV_ITEM_CLASS
                title=title
                draggable="false"
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.run(());
                    }
                }
            >
                {glyph}
            </div>
        }
        .into_any(),
    }
}
