//! Output rendering for normalized views.

use std::fmt::Write;

use ptrack_core::error::Result;
use ptrack_core::{ProgressLevel, TrackingEvent, TrackingView};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// The full view as JSON.
    #[default]
    Json,
    /// A plain-text summary, one line per event.
    Timeline,
}

pub fn render(view: &TrackingView, format: Format, pretty: bool) -> Result<String> {
    match format {
        Format::Json => render_json(view, pretty),
        Format::Timeline => Ok(render_timeline(view)),
    }
}

pub fn render_json(view: &TrackingView, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };
    Ok(out)
}

/// Human-readable summary:
///
/// ```text
/// CJ대한통운 612345678901 [4 배송출발]
///   2025-09-07T09:00  대전HUB  간선하차
/// ```
pub fn render_timeline(view: &TrackingView) -> String {
    let mut out = String::new();
    let carrier = view.carrier_name.as_deref().unwrap_or("-");
    let invoice = view.invoice_no.as_deref().unwrap_or("-");
    let _ = writeln!(out, "{carrier} {invoice} [{}]", level_text(view.current_level));

    if view.is_empty() {
        out.push_str("  (no tracking events)\n");
        return out;
    }
    for event in &view.events {
        let _ = writeln!(out, "  {}", event_line(event));
    }
    out
}

fn level_text(level: i64) -> String {
    match ProgressLevel::from_level(level) {
        Some(stage) => format!("{level} {stage}"),
        None => level.to_string(),
    }
}

fn event_line(event: &TrackingEvent) -> String {
    let when = match (&event.time, event.time_text.as_str()) {
        (Some(time), _) => time.as_str(),
        (None, "") => "-",
        (None, text) => text,
    };
    [when, event.r#where.as_str(), event.label.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("  ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
