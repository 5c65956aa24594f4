//! Upload-history popup opened from the app header.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app header owns the fetch and the `PanelState`; this component only
//! renders whatever rows the latest fetch produced, or a loading line while
//! none have arrived.

use leptos::prelude::*;

use crate::components::popup::Popup;
use crate::state::history::{EMPTY_HISTORY_MESSAGE, HISTORY_ERROR_MESSAGE, HistoryEntry, HistoryRow};
use crate::state::panel::PanelState;

#[component]
pub fn HistoryPopup(panel: RwSignal<PanelState>, on_close: Callback<()>) -> impl IntoView {
    let rows = move || panel.with(|p| p.history.clone());

    view! {
        <Popup title="Upload History" on_close=on_close>
            {move || match rows() {
                None => view! { <div class="history__status">"Loading…"</div> }.into_any(),
                Some(rows) => rows.into_iter().map(history_row).collect_view().into_any(),
            }}
        </Popup>
    }
}

fn history_row(row: HistoryRow) -> AnyView {
    match row {
        HistoryRow::Empty => view! { <div class="history__status">{EMPTY_HISTORY_MESSAGE}</div> }.into_any(),
        HistoryRow::Error => {
            view! { <div class="history__status history__status--error">{HISTORY_ERROR_MESSAGE}</div> }.into_any()
        }
        HistoryRow::Record(entry) => record_row(entry),
    }
}

fn record_row(entry: HistoryEntry) -> AnyView {
    let summary = entry.summary();
    view! {
        <div class="history__row">
            <a href=entry.href target="_blank" class="history__link">
                {entry.id}
            </a>
            <div class="history__summary">{summary}</div>
        </div>
    }
    .into_any()
}
