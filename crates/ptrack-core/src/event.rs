//! Event normalization — one raw checkpoint into a [`TrackingEvent`].
//!
//! A raw event may be a bare string, an object using any of several synonym
//! field names, or garbage. Each semantic field is read from an ordered key
//! list via [`first_present`]; the lists below are the single place to
//! extend when a new integration shows up.

use serde_json::{Map, Value};

use crate::fields::{first_present, to_level, to_text, truthy_text};
use crate::level::infer_level;
use crate::timestamp::{coerce_time, coerce_time_strict};
use crate::types::{TrackingEvent, DEFAULT_LEVEL};

pub const TIME_KEYS: &[&str] = &[
    "time",
    "timeText",
    "timeString",
    "occurredAt",
    "datetime",
    "dateTime",
    "createdAt",
    "scanTime",
];
pub const TIME_TEXT_KEYS: &[&str] = &["timeText", "timeString"];
pub const WHERE_KEYS: &[&str] = &["where", "location", "area", "branch", "place", "office"];
pub const LABEL_KEYS: &[&str] = &[
    "label",
    "statusText",
    "status",
    "kind",
    "message",
    "description",
    "detail",
    "msg",
];
pub const STATUS_KEYS: &[&str] = &["status", "statusText", "label", "kind"];
pub const DESCRIPTION_KEYS: &[&str] = &["description", "detail", "msg"];
pub const LEVEL_KEYS: &[&str] = &["level", "step", "state"];

/// Knobs that change event normalization away from the lenient default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOptions {
    /// Null out times that do not parse as a date.
    pub strict_timestamps: bool,
    /// Infer the level from the label when no level key is present.
    pub infer_levels: bool,
}

/// Normalize one raw event with default options.
///
/// Returns `None` for `null`, blank strings and non-object non-string
/// values.
pub fn normalize_event(raw: &Value) -> Option<TrackingEvent> {
    normalize_event_with(raw, EventOptions::default())
}

/// [`normalize_event`] with explicit options.
pub fn normalize_event_with(raw: &Value, opts: EventOptions) -> Option<TrackingEvent> {
    match raw {
        Value::String(s) => from_text(s, raw),
        Value::Object(obj) => Some(from_object(obj, raw, opts)),
        _ => None,
    }
}

fn from_text(s: &str, raw: &Value) -> Option<TrackingEvent> {
    let text = s.trim();
    if text.is_empty() {
        return None;
    }
    Some(TrackingEvent {
        time: None,
        time_text: String::new(),
        r#where: String::new(),
        location: String::new(),
        label: text.to_string(),
        status: text.to_string(),
        description: String::new(),
        level: DEFAULT_LEVEL,
        raw: raw.clone(),
    })
}

fn from_object(obj: &Map<String, Value>, raw: &Value, opts: EventOptions) -> TrackingEvent {
    let time_raw = first_present(obj, TIME_KEYS);
    let time = time_raw.and_then(|t| {
        if opts.strict_timestamps {
            coerce_time_strict(t)
        } else {
            coerce_time(t)
        }
    });
    let time_text = match first_present(obj, TIME_TEXT_KEYS) {
        Some(text) => to_text(Some(text)),
        None => truthy_text(time_raw).unwrap_or_default(),
    };

    let place = to_text(first_present(obj, WHERE_KEYS));
    let label = to_text(first_present(obj, LABEL_KEYS));
    let status = to_text(first_present(obj, STATUS_KEYS));
    let description = to_text(first_present(obj, DESCRIPTION_KEYS));

    let level = match first_present(obj, LEVEL_KEYS) {
        Some(value) => to_level(value).unwrap_or(DEFAULT_LEVEL),
        None if opts.infer_levels => infer_level(&label),
        None => DEFAULT_LEVEL,
    };

    TrackingEvent {
        time,
        time_text,
        r#where: place.clone(),
        location: place,
        label,
        status,
        description,
        level,
        raw: raw.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
