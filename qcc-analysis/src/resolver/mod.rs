//! Latest-observation resolver.
//!
//! Reduces a raw event stream to one authoritative label per
//! (comment, tagger) pair for a single characteristic.

mod latest;

pub use latest::{latest_events, resolve_latest, ResolvedLabels};
