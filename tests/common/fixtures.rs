//! Static payload corpora used across harnesses.
//!
//! Each fixture mirrors a response shape seen from a real integration. They
//! are kept as JSON text so harnesses exercise the same parse path as the
//! CLI.

use serde_json::Value;

/// Sweet Tracker style: `trackingDetails` with `timeString`/`kind`/`where`.
pub const SWEETTRACKER: &str = r#"{
  "invoiceNo": "612345678901",
  "carrierCode": "04",
  "companyName": "CJ대한통운",
  "level": 5,
  "complete": false,
  "trackingDetails": [
    { "timeString": "2025-09-06 21:10:00", "where": "곤지암Hub", "kind": "간선상차", "level": 3 },
    { "timeString": "2025-09-06 18:02:11", "where": "서울성수", "kind": "집화처리", "level": 2 },
    { "timeString": "2025-09-07 09:00:00", "where": "대전HUB", "kind": "간선하차", "level": 4 },
    { "timeString": "2025-09-07 13:40:00", "where": "대전유성", "kind": "배달출발", "level": 5 }
  ]
}"#;

/// Our own API's shipment view: nested `result.events`, dotted dates.
pub const NESTED_RESULT: &str = r#"{
  "result": {
    "events": [
      { "occurredAt": "2025.09.02 08:00", "location": "부산", "statusText": "배송중", "step": "3" },
      { "occurredAt": "2025.09.01 17:30", "location": "김해", "statusText": "집화완료", "step": "2" }
    ]
  },
  "courierName": "hanjin",
  "trackingNo": "4012-3456-7890",
  "lastSyncedAt": "2025-09-02T08:05:00"
}"#;

/// Only a delivered hint and a completion timestamp, no history.
pub const DELIVERED_ONLY: &str = r#"{
  "carrier": "LOGEN",
  "invoice": "98765",
  "status": "Delivered",
  "completedAt": "2025/09/03 11:15"
}"#;

/// Only a last-known event under `data.`.
pub const LAST_EVENT_ONLY: &str = r#"{
  "courier": "koreapost",
  "data": { "lastEvent": { "scanTime": 1757222400000, "office": "대전우편집중국", "message": "도착" } }
}"#;

/// Bare strings mixed with garbage inside `history`.
pub const MIXED_GARBAGE: &str = r#"{
  "history": ["접수", null, 42, "   ", { "label": "간선하차", "time": "2025-09-01 10:00" }, [1, 2]]
}"#;

pub fn all_fixtures() -> Vec<(&'static str, &'static str)> {
    vec![
        ("sweettracker", SWEETTRACKER),
        ("nested_result", NESTED_RESULT),
        ("delivered_only", DELIVERED_ONLY),
        ("last_event_only", LAST_EVENT_ONLY),
        ("mixed_garbage", MIXED_GARBAGE),
    ]
}

/// Parse a fixture. Panics on invalid JSON; fixtures are static.
pub fn payload(fixture: &str) -> Value {
    serde_json::from_str(fixture).expect("fixture must be valid JSON")
}
