//! Timestamp coercion.
//!
//! Carriers send epoch milliseconds, `2025.09.07 14:20`, `2025/09/07`,
//! RFC 3339 and worse. [`coerce_time`] folds these into one ISO-like string
//! without validating it; [`parse_instant`] is the validating half, used for
//! ordering and for strict mode.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Convert a raw time value into an ISO-like string.
///
/// - numbers are epoch milliseconds and become full RFC 3339 UTC strings
///   with millisecond precision;
/// - strings are trimmed, `.` and `/` become `-` and the first space
///   becomes `T`. The result is not checked. Strings that are already
///   canonical pass through unchanged;
/// - `null`, booleans, arrays, objects, blank strings and out-of-range
///   epochs give `None`.
pub fn coerce_time(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?;
            DateTime::<Utc>::from_timestamp_millis(millis)
                .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Value::String(s) => coerce_time_str(s),
        _ => None,
    }
}

/// String half of [`coerce_time`].
///
/// Strings already in canonical form (no space, readable by
/// [`parse_instant`]) are returned trimmed but otherwise untouched, so
/// coercing a coerced time is a no-op.
pub fn coerce_time_str(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if !s.contains(' ') && parse_instant(s).is_some() {
        return Some(s.to_string());
    }
    let s = s.replace(['.', '/'], "-");
    Some(s.replacen(' ', "T", 1))
}

/// [`coerce_time`] that drops results [`parse_instant`] cannot read.
pub fn coerce_time_strict(value: &Value) -> Option<String> {
    coerce_time(value).filter(|s| parse_instant(s).is_some())
}

/// Parse a coerced time into a UTC instant.
///
/// Accepts RFC 3339 and the naive forms `YYYY-MM-DDTHH:MM[:SS[.fff]]` and
/// `YYYY-MM-DD`; naive values are read as UTC.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sort key for an optional coerced time: epoch milliseconds, with
/// missing and unparseable times ordered after everything else.
pub fn sort_key(time: Option<&str>) -> (bool, i64) {
    match time.and_then(parse_instant) {
        Some(dt) => (false, dt.timestamp_millis()),
        None => (true, 0),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
