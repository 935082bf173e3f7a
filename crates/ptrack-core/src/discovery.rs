//! Event source discovery.
//!
//! Backends put the event list under whatever name they like. The payload
//! is probed against a fixed, priority-ordered list of dotted paths; if none
//! hold anything, a second list of "last known event" paths is tried and
//! its value treated as a one-element history.

use serde_json::Value;

use crate::fields::first_path;

/// Paths that may hold a full event history, highest priority first.
pub const EVENT_LIST_PATHS: &[&str] = &[
    "events",
    "trackingDetails",
    "details",
    "progresses",
    "progress",
    "scanDetails",
    "timeline",
    "logs",
    "history",
    "records",
    "list",
    "items",
    "checkpoints",
    "result.events",
    "result.trackingDetails",
    "result.progresses",
    "result.history",
    "data.events",
    "data.trackingDetails",
    "data.progresses",
    "data.history",
    "payload.events",
    "payload.trackingDetails",
];

/// Paths that may hold only the most recent event.
pub const LAST_EVENT_PATHS: &[&str] = &[
    "lastEvent",
    "lastDetail",
    "lastStatus",
    "latest",
    "result.lastEvent",
    "result.lastDetail",
    "result.lastStatus",
    "result.latest",
    "data.lastEvent",
    "data.lastDetail",
    "data.lastStatus",
    "data.latest",
];

/// Where a payload's events were found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventSource<'a> {
    /// The dotted path that matched.
    pub path: &'static str,
    /// True when the match came from [`LAST_EVENT_PATHS`].
    pub last_event_only: bool,
    pub value: &'a Value,
}

impl<'a> EventSource<'a> {
    /// Raw event candidates: the elements of an array, otherwise the value
    /// itself. Candidates may still be unusable (numbers, `null`s inside an
    /// array); event normalization drops those.
    pub fn candidates(&self) -> Vec<&'a Value> {
        match self.value {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        }
    }
}

/// Locate the event list in `payload`, or `None` if nothing matches.
pub fn discover_events(payload: &Value) -> Option<EventSource<'_>> {
    if let Some((path, value)) = first_path(payload, EVENT_LIST_PATHS) {
        return Some(EventSource {
            path,
            last_event_only: false,
            value,
        });
    }
    first_path(payload, LAST_EVENT_PATHS).map(|(path, value)| EventSource {
        path,
        last_event_only: true,
        value,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
