use super::*;

// =============================================================
// format_bytes
// =============================================================

#[test]
fn format_bytes_below_one_kib_is_integer_bytes() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1), "1 B");
    assert_eq!(format_bytes(512), "512 B");
    assert_eq!(format_bytes(1023), "1023 B");
}

#[test]
fn format_bytes_boundary_is_exactly_one_kb() {
    assert_eq!(format_bytes(1024), "1.00 kB");
}

#[test]
fn format_bytes_kilobytes_use_two_decimals() {
    assert_eq!(format_bytes(1536), "1.50 kB");
    assert_eq!(format_bytes(10 * 1024 + 256), "10.25 kB");
    assert_eq!(format_bytes(1024 * 1024 - 1), "1024.00 kB");
}

#[test]
fn format_bytes_rounds_ties_up() {
    assert_eq!(format_bytes(1152), "1.13 kB");
    assert_eq!(format_bytes(3200), "3.13 kB");
    assert_eq!(format_bytes(1024 * 1024 + 5 * 1024 * 1024 / 1000 + 1), "1.01 MB");
}

#[test]
fn format_bytes_megabytes_use_two_decimals() {
    assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
    assert_eq!(format_bytes(5 * 1024 * 1024 / 2), "2.50 MB");
}

#[test]
fn format_bytes_gigabytes_use_two_decimals() {
    assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GB");
    assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.00 GB");
}

#[test]
fn format_bytes_every_sub_kib_value_uses_byte_unit() {
    for b in 0..1024 {
        let text = format_bytes(b);
        assert_eq!(text, format!("{b} B"));
    }
}

#[test]
fn format_bytes_huge_values_stay_in_gigabytes() {
    assert_eq!(format_bytes(u64::MAX), "17179869184.00 GB");
}

// =============================================================
// format_upload_date
// =============================================================

#[test]
fn format_upload_date_renders_utc() {
    // 2024-01-15T09:05:00Z
    assert_eq!(
        format_upload_date(1_705_309_500_000, 0).as_deref(),
        Some("Jan 15, 2024, 9:05 AM")
    );
}

#[test]
fn format_upload_date_renders_afternoon_in_twelve_hour_clock() {
    // 2024-07-04T18:30:00Z
    assert_eq!(
        format_upload_date(1_720_117_800_000, 0).as_deref(),
        Some("Jul 4, 2024, 6:30 PM")
    );
}

#[test]
fn format_upload_date_applies_offset() {
    // 2024-01-15T02:00:00Z seen from UTC-5 is the previous evening.
    assert_eq!(
        format_upload_date(1_705_284_000_000, -300).as_deref(),
        Some("Jan 14, 2024, 9:00 PM")
    );
}

#[test]
fn format_upload_date_rejects_out_of_range_inputs() {
    assert_eq!(format_upload_date(i64::MAX, 0), None);
    assert_eq!(format_upload_date(0, 24 * 60), None);
}

#[test]
fn local_offset_is_utc_outside_browser() {
    assert_eq!(local_utc_offset_minutes(1_705_309_500_000), 0);
}
