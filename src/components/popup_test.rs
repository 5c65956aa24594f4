use super::*;

#[test]
fn escape_closes_popup() {
    assert!(closes_popup("Escape"));
}

#[test]
fn other_keys_keep_popup_open() {
    assert!(!closes_popup("Enter"));
    assert!(!closes_popup("Esc"));
    assert!(!closes_popup("e"));
}
