//! Upload-history rows built from one `/api/history` fetch outcome.
//!
//! DESIGN
//! ======
//! `build_history_rows` returns a consuming iterator: rows are produced on
//! demand, the sequence is finite, and it cannot be restarted. The caller
//! collects it and replaces the displayed list wholesale. Failures become a
//! single error row here so nothing escapes to the component.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::iter::FusedIterator;

use crate::net::api::upload_href;
use crate::net::error::ApiError;
use crate::net::types::HistoryRecord;
use crate::util::format::{format_bytes, format_upload_date};

pub const EMPTY_HISTORY_MESSAGE: &str = "You don't have any upload history.";
pub const HISTORY_ERROR_MESSAGE: &str = "Unable to retrieve upload history.";

/// One renderable line of the history popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryRow {
    /// The fetch succeeded but returned no uploads.
    Empty,
    /// A single past upload.
    Record(HistoryEntry),
    /// The fetch failed or returned an unreadable body.
    Error,
}

/// Display fields for a past upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub href: String,
    /// Upload time, when the id reads as a millisecond timestamp.
    pub date: Option<String>,
    pub files: u64,
    pub size: String,
}

impl HistoryEntry {
    /// Secondary line: date, file count, and size joined by middle dots.
    pub fn summary(&self) -> String {
        let counts = format!("{} Files \u{b7} {}", self.files, self.size);
        match &self.date {
            Some(date) => format!("{date} \u{b7} {counts}"),
            None => counts,
        }
    }
}

/// Interpret an upload id as milliseconds since the Unix epoch.
pub fn timestamp_from_id(id: &str) -> Option<i64> {
    id.trim().parse::<i64>().ok()
}

/// Convert one record into its row, resolving the local offset for its date.
pub fn history_entry(record: HistoryRecord, utc_offset_minutes: fn(i64) -> i32) -> HistoryEntry {
    let date = timestamp_from_id(&record.id).and_then(|ts| format_upload_date(ts, utc_offset_minutes(ts)));
    HistoryEntry {
        href: upload_href(&record.id),
        date,
        files: record.files,
        size: format_bytes(record.size),
        id: record.id,
    }
}

/// Turn a fetch outcome into rows. Errors are logged and become one error row.
pub fn build_history_rows(
    outcome: Result<Vec<HistoryRecord>, ApiError>,
    utc_offset_minutes: fn(i64) -> i32,
) -> HistoryRows {
    match outcome {
        Ok(records) if records.is_empty() => HistoryRows::single(HistoryRow::Empty),
        Ok(records) => HistoryRows { inner: Inner::Records { records: records.into_iter(), utc_offset_minutes } },
        Err(e) => {
            leptos::logging::warn!("upload history fetch failed: {e}");
            HistoryRows::single(HistoryRow::Error)
        }
    }
}

/// Lazy row sequence returned by [`build_history_rows`].
#[derive(Debug)]
pub struct HistoryRows {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Single(Option<HistoryRow>),
    Records {
        records: std::vec::IntoIter<HistoryRecord>,
        utc_offset_minutes: fn(i64) -> i32,
    },
}

impl HistoryRows {
    fn single(row: HistoryRow) -> Self {
        Self { inner: Inner::Single(Some(row)) }
    }
}

impl Iterator for HistoryRows {
    type Item = HistoryRow;

    fn next(&mut self) -> Option<HistoryRow> {
        match &mut self.inner {
            Inner::Single(row) => row.take(),
            Inner::Records { records, utc_offset_minutes } => {
                let record = records.next()?;
                Some(HistoryRow::Record(history_entry(record, *utc_offset_minutes)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match &self.inner {
            Inner::Single(row) => usize::from(row.is_some()),
            Inner::Records { records, .. } => records.len(),
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for HistoryRows {}

impl FusedIterator for HistoryRows {}
