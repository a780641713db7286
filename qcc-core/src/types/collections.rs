//! Fast hash collections used on hot paths.
//!
//! Anything that ends up in a report uses `BTreeMap`/`BTreeSet` instead so
//! output ordering is deterministic.

pub use rustc_hash::{FxHashMap, FxHashSet};
