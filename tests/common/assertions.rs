//! Domain-specific assertion macros for ptrack harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which normalization invariant was violated.

use ptrack::{parse_instant, TrackingView};

/// Assert the event labels of a view, in order.
///
/// ```rust
/// assert_labels!(view, ["집화완료", "배송중"]);
/// ```
#[macro_export]
macro_rules! assert_labels {
    ($view:expr, [$($label:expr),* $(,)?]) => {{
        let view: &ptrack::TrackingView = &$view;
        let actual: Vec<&str> = view.events.iter().map(|e| e.label.as_str()).collect();
        let expected: Vec<&str> = vec![$($label),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "event labels differ\n  raw: {}", view.raw
        );
    }};
}

/// Assert the `time` column of a view, in order.
#[macro_export]
macro_rules! assert_times {
    ($view:expr, [$($time:expr),* $(,)?]) => {{
        let view: &ptrack::TrackingView = &$view;
        let actual: Vec<Option<&str>> = view.events.iter().map(|e| e.time.as_deref()).collect();
        let expected: Vec<Option<&str>> = vec![$($time),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "event times differ\n  raw: {}", view.raw
        );
    }};
}

// ---------------------------------------------------------------------------
// View invariant helpers
// ---------------------------------------------------------------------------

/// Check the invariants every normalized view must satisfy, whatever the
/// input:
///
/// - events with a parseable time come first, in ascending order;
/// - `carrierName` mirrors `carrier.name`;
/// - `raw` is always an object;
/// - synthesized events only appear alone.
pub fn assert_view_invariants(view: &TrackingView) {
    assert_eq!(
        view.carrier_name, view.carrier.name,
        "carrierName must mirror carrier.name"
    );
    assert!(view.raw.is_object(), "raw must be an object: {}", view.raw);

    let keys: Vec<_> = view
        .events
        .iter()
        .map(|e| e.time.as_deref().and_then(parse_instant))
        .collect();
    let first_untimed = keys.iter().position(Option::is_none).unwrap_or(keys.len());
    assert!(
        keys[first_untimed..].iter().all(Option::is_none),
        "untimed events must sort last: {:?}",
        keys
    );
    assert!(
        keys[..first_untimed].windows(2).all(|w| w[0] <= w[1]),
        "timed events must be ascending: {:?}",
        keys
    );

    for event in &view.events {
        assert_eq!(event.r#where, event.location, "where/location must match");
    }
    if view.events.iter().any(|e| e.is_synthesized()) {
        assert_eq!(view.events.len(), 1, "synthesized event must be alone");
    }
}
