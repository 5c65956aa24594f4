//! Human-readable formatting for byte counts and upload timestamps.
//!
//! SYSTEM CONTEXT
//! ==============
//! The history popup renders these strings directly, so both helpers are
//! total: every byte count has a display, and an unrepresentable timestamp
//! yields `None` rather than a panic.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, FixedOffset};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Format a byte count as `B`, `kB`, `MB`, or `GB`.
///
/// Bytes are shown as an integer; larger units use two decimals with ties
/// rounded up (`1152` is `"1.13 kB"`).
pub fn format_bytes(bytes: u64) -> String {
    match bytes {
        b if b < KIB => format!("{b} B"),
        b if b < MIB => scaled(b, KIB, "kB"),
        b if b < GIB => scaled(b, MIB, "MB"),
        b => scaled(b, GIB, "GB"),
    }
}

/// `bytes / unit` to two decimals, half up, in integer hundredths.
fn scaled(bytes: u64, unit: u64, suffix: &str) -> String {
    let unit = u128::from(unit);
    let hundredths = (u128::from(bytes) * 100 + unit / 2) / unit;
    format!("{}.{:02} {suffix}", hundredths / 100, hundredths % 100)
}

/// Format a millisecond Unix timestamp as `"Oct 19, 2026, 3:45 PM"`.
///
/// `utc_offset_minutes` is the local offset east of UTC (UTC-5 is `-300`).
/// Returns `None` when the timestamp or offset is out of range.
pub fn format_upload_date(timestamp_ms: i64, utc_offset_minutes: i32) -> Option<String> {
    let offset = FixedOffset::east_opt(utc_offset_minutes.checked_mul(60)?)?;
    let utc = DateTime::from_timestamp_millis(timestamp_ms)?;
    Some(utc.with_timezone(&offset).format("%b %-d, %Y, %-I:%M %p").to_string())
}

/// Browser-local UTC offset in minutes for the given instant.
///
/// Outside the browser this is always `0`, so server renders and tests show
/// UTC times.
pub fn local_utc_offset_minutes(timestamp_ms: i64) -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_precision_loss)]
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms as f64));
        // JS reports minutes *behind* UTC.
        #[allow(clippy::cast_possible_truncation)]
        let behind = date.get_timezone_offset() as i32;
        -behind
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp_ms;
        0
    }
}
