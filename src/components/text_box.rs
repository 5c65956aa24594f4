//! Multi-line text input primitive.

use leptos::html::Textarea;
use leptos::prelude::*;

use crate::util::classes::join_classes;

const TEXT_BOX_CLASS: &str = "text-box";

/// `<textarea>` with the shared input styling plus caller classes.
///
/// `textarea_ref` lets a parent read the value on submit.
#[component]
pub fn TextBox(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] classes: Vec<String>,
    #[prop(default = 5)] rows: u32,
    #[prop(optional)] textarea_ref: NodeRef<Textarea>,
) -> impl IntoView {
    let class = join_classes(TEXT_BOX_CLASS, &classes);

    view! {
        <textarea
            id=id
            placeholder=placeholder
            class=class
            rows=rows.to_string()
            node_ref=textarea_ref
        ></textarea>
    }
}
