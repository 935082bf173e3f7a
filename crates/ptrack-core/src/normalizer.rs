//! Normalizer — builds a [`TrackingView`] from an arbitrary payload.
//!
//! Assembly order: carrier and invoice lookup, event discovery and
//! normalization, delivered-event synthesis, stable sort by time, then
//! current-level resolution. Every step has a default, so the whole thing
//! is total.

use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::carrier::CarrierResolver;
use crate::config::NormalizerConfig;
use crate::discovery::discover_events;
use crate::event::{normalize_event_with, EventOptions};
use crate::fields::{first_present, is_truthy, to_level, to_text, truthy_text};
use crate::timestamp::{coerce_time, coerce_time_strict, sort_key};
use crate::types::{CarrierRef, TrackingEvent, TrackingView, DEFAULT_LEVEL, DELIVERED_LEVEL};

pub const CARRIER_CODE_KEYS: &[&str] = &["carrierCode", "courierCode", "code"];
pub const CARRIER_NAME_KEYS: &[&str] = &[
    "carrierName",
    "courierName",
    "companyName",
    "carrier",
    "courier",
    "company",
];
/// Keys read from a carrier candidate that is itself an object.
pub const NESTED_CARRIER_KEYS: &[&str] = &["name", "label", "code"];
pub const INVOICE_KEYS: &[&str] = &["invoiceNo", "trackingNo", "trackingNumber", "invoice"];
pub const DELIVERED_FLAG_KEYS: &[&str] = &["complete", "completed", "delivered"];
pub const DELIVERED_AT_KEYS: &[&str] = &["deliveredAt", "completeAt", "completedAt", "finishedAt"];
pub const CURRENT_LEVEL_KEYS: &[&str] = &["currentLevel", "level"];
pub const LAST_SYNCED_KEYS: &[&str] = &["lastSyncedAt", "syncedAt"];

/// Immutable normalizer: a carrier resolver plus event options.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    carriers: CarrierResolver,
    options: EventOptions,
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            carriers: CarrierResolver::new(),
            options: EventOptions {
                strict_timestamps: config.strict_timestamps,
                infer_levels: config.infer_levels,
            },
        }
    }

    /// Build from a full [`Config`](crate::Config), including extra carrier
    /// aliases.
    pub fn from_config(config: &crate::Config) -> Self {
        Self {
            carriers: CarrierResolver::with_aliases(&config.carriers.aliases),
            ..Self::new(&config.normalizer)
        }
    }

    pub fn resolver(&self) -> &CarrierResolver {
        &self.carriers
    }

    /// Normalize one payload. Non-object payloads are treated as `{}`.
    pub fn normalize(&self, payload: &Value) -> TrackingView {
        let empty = Map::new();
        let obj = payload.as_object().unwrap_or(&empty);

        let code_value = first_present(obj, CARRIER_CODE_KEYS);
        let carrier_code = truthy_text(code_value);
        let carrier_name = first_present(obj, CARRIER_NAME_KEYS)
            .or(code_value)
            .and_then(carrier_text)
            .and_then(|raw| self.carriers.resolve(&raw));
        let invoice_no = truthy_text(first_present(obj, INVOICE_KEYS));

        let mut events = self.collect_events(payload);

        let delivered = is_delivered(obj);
        let delivered_at = first_present(obj, DELIVERED_AT_KEYS);
        if events.is_empty() && (delivered || delivered_at.is_some_and(is_truthy)) {
            events.push(self.synthesize_delivery(delivered_at));
        }

        events.sort_by_cached_key(|event| sort_key(event.time.as_deref()));

        let current_level = first_present(obj, CURRENT_LEVEL_KEYS)
            .and_then(to_level)
            .or_else(|| delivered.then_some(DELIVERED_LEVEL))
            .or_else(|| events.last().map(|event| event.level))
            .unwrap_or(DEFAULT_LEVEL);

        if cfg!(debug_assertions) && events.is_empty() {
            tracing::debug!(raw = %payload, "no tracking events found");
        }

        TrackingView {
            carrier: CarrierRef {
                code: carrier_code,
                name: carrier_name.clone(),
            },
            carrier_name,
            invoice_no,
            current_level,
            last_synced_at: first_present(obj, LAST_SYNCED_KEYS).map(|v| to_text(Some(v))),
            events,
            raw: if payload.is_object() {
                payload.clone()
            } else {
                Value::Object(Map::new())
            },
        }
    }

    fn collect_events(&self, payload: &Value) -> Vec<TrackingEvent> {
        let Some(source) = discover_events(payload) else {
            return Vec::new();
        };
        tracing::debug!(
            path = source.path,
            last_event_only = source.last_event_only,
            "event source discovered"
        );
        source
            .candidates()
            .into_iter()
            .filter_map(|raw| {
                let event = normalize_event_with(raw, self.options);
                if event.is_none() {
                    tracing::trace!(%raw, "dropping unusable event");
                }
                event
            })
            .collect()
    }

    fn synthesize_delivery(&self, delivered_at: Option<&Value>) -> TrackingEvent {
        let time = delivered_at.and_then(|v| {
            if self.options.strict_timestamps {
                coerce_time_strict(v)
            } else {
                coerce_time(v)
            }
        });
        TrackingEvent::synthesized_delivery(time, truthy_text(delivered_at).unwrap_or_default())
    }
}

/// Text to feed the carrier resolver. Objects contribute their own
/// name/label/code; other falsy values contribute nothing.
fn carrier_text(value: &Value) -> Option<String> {
    match value {
        Value::Object(inner) => truthy_text(first_present(inner, NESTED_CARRIER_KEYS)),
        other => truthy_text(Some(other)),
    }
}

fn is_delivered(obj: &Map<String, Value>) -> bool {
    DELIVERED_FLAG_KEYS
        .iter()
        .any(|key| obj.get(*key) == Some(&Value::Bool(true)))
        || obj
            .get("status")
            .and_then(Value::as_str)
            .is_some_and(|s| s.to_lowercase() == "delivered")
}

/// Normalize with the default normalizer (built-in aliases, lenient times).
pub fn normalize(payload: &Value) -> TrackingView {
    static DEFAULT: OnceLock<Normalizer> = OnceLock::new();
    DEFAULT.get_or_init(Normalizer::default).normalize(payload)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
