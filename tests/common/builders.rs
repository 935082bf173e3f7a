//! Test builders — ergonomic constructors for tracking payloads.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// PayloadBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw tracking payloads.
///
/// # Example
///
/// ```rust
/// let payload = PayloadBuilder::new()
///     .carrier("CJ")
///     .invoice("612345678901")
///     .event("2025-09-01 10:00", "집화완료", 2)
///     .build();
/// ```
#[derive(Default)]
pub struct PayloadBuilder {
    fields: Map<String, Value>,
    events: Vec<Value>,
    events_key: Option<String>,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn carrier(self, name: &str) -> Self {
        self.field("carrierName", name)
    }

    pub fn carrier_code(self, code: &str) -> Self {
        self.field("carrierCode", code)
    }

    pub fn invoice(self, no: &str) -> Self {
        self.field("invoiceNo", no)
    }

    pub fn delivered(self) -> Self {
        self.field("delivered", true)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Append an event with a time, label and level.
    pub fn event(self, time: &str, label: &str, level: i64) -> Self {
        self.raw_event(json!({ "time": time, "label": label, "level": level }))
    }

    /// Append an event with no time.
    pub fn untimed_event(self, label: &str) -> Self {
        self.raw_event(json!({ "label": label }))
    }

    pub fn raw_event(mut self, event: Value) -> Self {
        self.events.push(event);
        self
    }

    /// Store events under a dotted path instead of `events`.
    pub fn events_at(mut self, path: &str) -> Self {
        self.events_key = Some(path.to_string());
        self
    }

    pub fn build(self) -> Value {
        let mut root = Value::Object(self.fields);
        if self.events.is_empty() {
            return root;
        }
        let path = self.events_key.unwrap_or_else(|| "events".to_string());
        let mut segments: Vec<&str> = path.split('.').collect();
        let leaf = segments.pop().expect("path has at least one segment");
        let mut cur = &mut root;
        for segment in segments {
            cur = cur
                .as_object_mut()
                .expect("intermediate is an object")
                .entry(segment)
                .or_insert_with(|| json!({}));
        }
        cur.as_object_mut()
            .expect("intermediate is an object")
            .insert(leaf.to_string(), Value::Array(self.events));
        root
    }
}
