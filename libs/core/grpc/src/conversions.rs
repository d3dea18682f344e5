//! Protobuf well-known-type conversions
//!
//! `google.protobuf.Timestamp` ↔ `chrono::DateTime<Utc>`.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Convert a UTC datetime to a protobuf timestamp
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> Timestamp {
  Timestamp {
    seconds: dt.timestamp(),
    nanos: dt.timestamp_subsec_nanos() as i32,
  }
}

/// Convert a protobuf timestamp to a UTC datetime
///
/// Fails when `nanos` is outside `0..1_000_000_000` or the instant is out of
/// chrono's range.
pub fn timestamp_to_datetime(ts: &Timestamp) -> Result<DateTime<Utc>, String> {
  let nanos = u32::try_from(ts.nanos)
    .ok()
    .filter(|n| *n < 1_000_000_000)
    .ok_or_else(|| format!("timestamp nanos out of range: {}", ts.nanos))?;

  DateTime::from_timestamp(ts.seconds, nanos)
    .ok_or_else(|| format!("timestamp out of range: {}s", ts.seconds))
}
