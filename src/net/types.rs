//! Wire DTOs for the Share REST endpoints.
//!
//! DESIGN
//! ======
//! The backend is lenient about numeric encodings (ids arrive as numbers or
//! strings, counts occasionally as floats), so deserializers here normalize
//! instead of rejecting whole payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Signed-in user as returned inside `GET /api/user/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Account email, when the backend includes it.
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    /// `"First Last"`, trimmed when either part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname).trim().to_owned()
    }
}

/// Envelope of a successful session probe.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    pub user: SessionUser,
}

/// One past upload as listed by `GET /api/history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Upload identifier. Numeric ids are kept in their decimal form.
    #[serde(deserialize_with = "deserialize_record_id")]
    pub id: String,
    /// Number of files in the upload.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub files: u64,
    /// Total size of the upload in bytes.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub size: u64,
}

/// Bug report submitted as form fields to `POST /api/report`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
}

impl ReportDraft {
    /// Form-encoded field pairs in submission order.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("title", &self.title), ("description", &self.description)]
    }
}

/// Result body of `POST /api/report`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub success: bool,
}

fn deserialize_record_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
