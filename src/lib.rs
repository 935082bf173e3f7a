//! ptrack — shipment-tracking payload normalizer.
//!
//! Command-line front end over [`ptrack_core`]. This crate re-exports the
//! core API so integration tests and benchmarks can import it from one
//! place, and adds the pieces only the binary needs: reading payloads and
//! rendering views.
//!
//! # Flow
//!
//! ```text
//! file / stdin ──► input ──► Normalizer ──► render ──► stdout
//! ```

pub mod input;
pub mod render;

pub use ptrack_core::*;
