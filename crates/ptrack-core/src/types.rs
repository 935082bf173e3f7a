//! Core types for ptrack-core.
//!
//! These are the only shapes callers see: the canonical [`TrackingView`],
//! its [`TrackingEvent`]s and the [`CarrierRef`] identity pair. Field names
//! serialize in `camelCase` to match what older consumers already read.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Level used whenever a source gives no usable progress stage.
pub const DEFAULT_LEVEL: i64 = 3;

/// Level assigned to the synthesized "delivered" event and to payloads
/// that only carry a delivered flag.
pub const DELIVERED_LEVEL: i64 = 5;

/// Label of the synthesized terminal event.
pub const DELIVERED_LABEL: &str = "배송완료";

/// One checkpoint in a shipment's journey.
///
/// Every string field defaults to `""`; only `time` is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    /// ISO-like timestamp, see [`coerce_time`](crate::coerce_time).
    pub time: Option<String>,
    /// Original textual time, kept for display when `time` is unusable.
    pub time_text: String,
    /// Scan location. Duplicated in `location`.
    pub r#where: String,
    pub location: String,
    /// Human-readable event text. `status` is resolved from a narrower
    /// synonym list and may differ.
    pub label: String,
    pub status: String,
    pub description: String,
    /// Progress stage, conventionally 1..=5 (5 = delivered).
    pub level: i64,
    /// The source value this event was built from.
    pub raw: Value,
}

impl TrackingEvent {
    /// Terminal event used when a payload signals delivery but carries no
    /// event history.
    pub(crate) fn synthesized_delivery(time: Option<String>, time_text: String) -> Self {
        Self {
            time,
            time_text,
            r#where: String::new(),
            location: String::new(),
            label: DELIVERED_LABEL.to_string(),
            status: DELIVERED_LABEL.to_string(),
            description: String::new(),
            level: DELIVERED_LEVEL,
            raw: serde_json::json!({ "synthesized": true }),
        }
    }

    /// Whether this event was synthesized rather than read from the source.
    pub fn is_synthesized(&self) -> bool {
        self.raw.get("synthesized").and_then(Value::as_bool) == Some(true)
    }
}

/// Carrier identity as reported by the source plus its canonical name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierRef {
    /// Raw carrier identifier exactly as the source gave it.
    pub code: Option<String>,
    /// Alias-resolved display name.
    pub name: Option<String>,
}

/// The canonical projection of one tracking payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingView {
    pub carrier: CarrierRef,
    /// Same as `carrier.name`; older consumers read this one.
    pub carrier_name: Option<String>,
    pub invoice_no: Option<String>,
    pub current_level: i64,
    pub last_synced_at: Option<String>,
    /// Ascending by time; events without a parseable time come last.
    pub events: Vec<TrackingEvent>,
    /// The payload this view was built from (`{}` for non-object input).
    pub raw: Value,
}

impl TrackingView {
    /// True when there is nothing to show yet. Callers treat this as
    /// "no tracking information available", not as a failure.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
