//! Single-line text input primitive.

use leptos::html::Input;
use leptos::prelude::*;

use crate::util::classes::join_classes;

const FIELD_CLASS: &str = "field";

/// `<input>` with the shared input styling plus caller classes.
#[component]
pub fn Field(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] classes: Vec<String>,
    #[prop(optional)] input_ref: NodeRef<Input>,
) -> impl IntoView {
    let class = join_classes(FIELD_CLASS, &classes);

    view! { <input type=input_type id=id placeholder=placeholder class=class node_ref=input_ref/> }
}
