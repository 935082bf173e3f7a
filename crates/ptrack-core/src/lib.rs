//! ptrack-core — shipment-tracking payload normalization.
//!
//! Carrier integrations disagree on almost every field name. This crate
//! absorbs that variance and hands callers one canonical [`TrackingView`].
//!
//! # Pipeline
//!
//! ```text
//! payload ──► discovery ──► event normalization ──► synthesis ──► sort ──► level
//!    │
//!    └──► carrier alias resolution / invoice lookup
//! ```
//!
//! Normalization is total: any shape of input produces a fully populated
//! view, never an error.

pub mod carrier;
pub mod catalogue;
pub mod config;
pub mod discovery;
pub mod error;
pub mod event;
pub mod fields;
pub mod level;
pub mod normalizer;
pub mod timestamp;
pub mod types;

pub use carrier::{canonical_carrier_name, CarrierResolver};
pub use catalogue::{carrier_label, carrier_options, find_carrier, normalize_tracking_no, CarrierInfo, TrackingRequest};
pub use config::Config;
pub use discovery::{discover_events, EventSource};
pub use error::{Error, Result};
pub use event::normalize_event;
pub use level::{infer_level, ProgressLevel};
pub use normalizer::{normalize, Normalizer};
pub use timestamp::{coerce_time, parse_instant};
pub use types::{CarrierRef, TrackingEvent, TrackingView};
