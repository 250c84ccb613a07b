//! Structured log record serialized as line-delimited JSON

use super::call_site::CallSite;
use super::level::Severity;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// One structured log statement.
///
/// Field declaration order here is the JSON key order on the wire:
/// timestamp, message, error, level, caller, context. `error` and
/// `context` are omitted entirely when unset.
///
/// The convenience level methods on [`crate::JsonLogger`] never populate
/// `error` or `context`; callers wanting them build a record with
/// [`StructuredRecord::with_error`] / [`StructuredRecord::with_context`]
/// and hand it to [`crate::JsonLogger::write_record`].
#[derive(Debug, Clone, Serialize)]
pub struct StructuredRecord {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub level: Severity,
    pub caller: CallSite,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<Box<RawValue>>,
}

/// ISO 8601 with millisecond precision: `2024-01-02T15:04:05.123Z`
fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl StructuredRecord {
    /// Create a record stamped with the current instant.
    pub fn new(level: Severity, message: impl Into<String>, caller: CallSite) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
            error: None,
            level,
            caller,
            context: Vec::new(),
        }
    }

    /// Attach an error description.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Append a pre-serialized JSON fragment to the context list.
    /// Fragments keep their insertion order on the wire.
    #[must_use]
    pub fn with_context(mut self, fragment: Box<RawValue>) -> Self {
        self.context.push(fragment);
        self
    }

    /// Serialize to a single-line JSON object (no trailing newline).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
