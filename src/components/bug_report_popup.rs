//! Bug-report popup opened from the app header.
//!
//! The popup owns its `ReportSubmitter`, so each opening starts from a fresh
//! `Idle` control and a result arriving after close is dropped.

use leptos::html::{Input, Textarea};
use leptos::prelude::*;

use crate::components::field::Field;
use crate::components::popup::Popup;
use crate::components::text_box::TextBox;
use crate::state::report::{
    FAILURE_MESSAGE, ReportSubmitter, SUBMIT_LABEL, SUBMITTING_LABEL, SUCCESS_MESSAGE, SubmitState,
};

#[component]
pub fn BugReportPopup(on_close: Callback<()>) -> impl IntoView {
    let submitter = RwSignal::new(ReportSubmitter::default());
    let title_ref = NodeRef::<Input>::new();
    let description_ref = NodeRef::<Textarea>::new();

    on_cleanup(move || {
        submitter.try_update(ReportSubmitter::retire);
    });

    let on_submit = move |_| {
        let title = title_ref.get_untracked().map(|el| el.value());
        let description = description_ref.get_untracked().map(|el| el.value());
        let Some((ticket, draft)) = submitter.try_update(|s| s.begin(title, description)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_report(&draft).await;
            submitter.try_update(|s| s.finish(ticket, outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, draft);
    };

    let control = move || match submitter.with(ReportSubmitter::state) {
        SubmitState::Idle => view! {
            <button class="btn btn--primary report__submit" on:click=on_submit>
                {SUBMIT_LABEL}
            </button>
        }
        .into_any(),
        SubmitState::Submitting => view! {
            <button class="btn btn--primary report__submit report__submit--pending" disabled=true>
                {SUBMITTING_LABEL}
            </button>
        }
        .into_any(),
        SubmitState::Success => {
            view! { <strong class="report__message report__message--success">{SUCCESS_MESSAGE}</strong> }.into_any()
        }
        SubmitState::Failure => {
            view! { <strong class="report__message report__message--failure">{FAILURE_MESSAGE}</strong> }.into_any()
        }
    };

    view! {
        <Popup title="Report An Issue" on_close=on_close>
            <div
                class="report"
                class:report--settled=move || submitter.with(|s| s.state().is_terminal())
            >
                <label class="report__label">"TITLE"</label>
                <Field classes=vec!["w-full".to_owned()] input_ref=title_ref/>
                <label class="report__label">"DESCRIPTION"</label>
                <TextBox classes=vec!["w-full".to_owned(), "resize-none".to_owned()] rows=5 textarea_ref=description_ref/>
                {control}
            </div>
        </Popup>
    }
}
