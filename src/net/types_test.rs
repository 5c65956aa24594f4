use super::*;

// =============================================================
// SessionResponse
// =============================================================

#[test]
fn session_response_parses_user_and_ignores_extra_fields() {
    let body = r#"{"user":{"firstname":"Ada","lastname":"Lovelace","user_id":7,"email":"ada@example.com"}}"#;
    let parsed: SessionResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.user.firstname, "Ada");
    assert_eq!(parsed.user.lastname, "Lovelace");
    assert_eq!(parsed.user.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn session_response_email_is_optional() {
    let parsed: SessionResponse = serde_json::from_str(r#"{"user":{"firstname":"A","lastname":"B"}}"#).unwrap();
    assert_eq!(parsed.user.email, None);
}

#[test]
fn session_response_without_user_is_rejected() {
    assert!(serde_json::from_str::<SessionResponse>("{}").is_err());
}

#[test]
fn full_name_joins_and_trims() {
    let user = SessionUser { firstname: "Ada".to_owned(), lastname: "Lovelace".to_owned(), email: None };
    assert_eq!(user.full_name(), "Ada Lovelace");

    let mononym = SessionUser { firstname: "Plato".to_owned(), lastname: String::new(), email: None };
    assert_eq!(mononym.full_name(), "Plato");
}

// =============================================================
// HistoryRecord
// =============================================================

#[test]
fn history_record_accepts_numeric_id() {
    let record: HistoryRecord = serde_json::from_str(r#"{"id":1705309500000,"files":3,"size":2048}"#).unwrap();
    assert_eq!(record.id, "1705309500000");
    assert_eq!(record.files, 3);
    assert_eq!(record.size, 2048);
}

#[test]
fn history_record_accepts_string_id() {
    let record: HistoryRecord = serde_json::from_str(r#"{"id":"abc123","files":1,"size":10}"#).unwrap();
    assert_eq!(record.id, "abc123");
}

#[test]
fn history_record_accepts_integral_float_counts() {
    let record: HistoryRecord = serde_json::from_str(r#"{"id":1,"files":2.0,"size":4096.0}"#).unwrap();
    assert_eq!(record.files, 2);
    assert_eq!(record.size, 4096);
}

#[test]
fn history_record_rejects_negative_or_fractional_size() {
    assert!(serde_json::from_str::<HistoryRecord>(r#"{"id":1,"files":1,"size":-5}"#).is_err());
    assert!(serde_json::from_str::<HistoryRecord>(r#"{"id":1,"files":1,"size":1.5}"#).is_err());
}

#[test]
fn history_record_rejects_null_id() {
    assert!(serde_json::from_str::<HistoryRecord>(r#"{"id":null,"files":1,"size":1}"#).is_err());
}

#[test]
fn history_list_parses_array() {
    let records: Vec<HistoryRecord> =
        serde_json::from_str(r#"[{"id":1,"files":1,"size":1},{"id":2,"files":2,"size":2}]"#).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, "2");
}

// =============================================================
// Report
// =============================================================

#[test]
fn report_draft_form_fields_are_title_then_description() {
    let draft = ReportDraft { title: "Crash".to_owned(), description: "On upload".to_owned() };
    assert_eq!(draft.form_fields(), [("title", "Crash"), ("description", "On upload")]);
}

#[test]
fn report_response_reads_success_flag() {
    let ok: ReportResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(ok.success);
    let missing: ReportResponse = serde_json::from_str("{}").unwrap();
    assert!(!missing.success);
}
