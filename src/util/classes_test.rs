use super::*;

#[test]
fn join_classes_appends_extras_after_base() {
    let extra = vec!["w-full".to_owned(), "resize-none".to_owned()];
    assert_eq!(join_classes("text-box", &extra), "text-box w-full resize-none");
}

#[test]
fn join_classes_without_extras_is_base() {
    assert_eq!(join_classes("field", &[]), "field");
}

#[test]
fn join_classes_skips_blank_entries() {
    let extra = vec![String::new(), "  ".to_owned(), " mt-3 ".to_owned()];
    assert_eq!(join_classes("button", &extra), "button mt-3");
}
