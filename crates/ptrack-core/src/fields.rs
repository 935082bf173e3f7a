//! Guarded accessors over untyped JSON.
//!
//! Payloads are `serde_json::Value` at the boundary. Everything that reads
//! them goes through these helpers so that absence, `null` and wrong types
//! all degrade the same way. `null` counts as absent everywhere.

use serde_json::{Map, Value};

/// First key in `keys` whose value is present and not `null`.
///
/// Later keys are never consulted once an earlier one is present, even if
/// the earlier value is unusable (`{"level": "x", "step": 4}` yields `"x"`).
pub fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

/// Resolve a dotted path (`"result.events"`) step by step.
///
/// Only objects are traversed. A missing segment or a non-object
/// intermediate ends the walk with `None`, as does a `null` final value.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cur = root;
    for segment in path.split('.') {
        cur = cur.as_object()?.get(segment)?;
    }
    (!cur.is_null()).then_some(cur)
}

/// First dotted path in `paths` that resolves to a non-null value, with the
/// path that matched.
pub fn first_path<'a>(
    root: &'a Value,
    paths: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    paths
        .iter()
        .find_map(|path| lookup_path(root, path).map(|value| (*path, value)))
}

/// JavaScript-style truthiness: `null`, `false`, `0`, `NaN` and `""` are
/// falsy; arrays and objects are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value as display text. `null` becomes `""`; strings are taken
/// verbatim; everything else uses its compact JSON form.
pub fn to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Like [`to_text`] but `None` unless the value is truthy.
pub fn truthy_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| is_truthy(v)).map(|v| to_text(Some(v)))
}

/// Numeric coercion in the spirit of JavaScript's `Number(x)`.
///
/// Numbers pass through, booleans become 1/0, strings are trimmed and
/// parsed (blank is 0). Arrays, objects, `null` and unparseable strings
/// yield `None`.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|f| !f.is_nan())
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce to a progress level: finite, non-zero numbers are truncated to
/// an integer; anything else is `None`.
pub fn to_level(value: &Value) -> Option<i64> {
    to_number(value)
        .filter(|f| f.is_finite() && *f != 0.0)
        .map(|f| f.trunc() as i64)
        .filter(|level| *level != 0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
