//! Pattern engine: repetitive-answer detection over a tagger's YES/NO stream.
//!
//! Two independent detectors share the same time-ordered binary sequence:
//! whole-sequence heuristics ([`SimpleSequencePatterns`]) and the fixed
//! 12-position window scan ([`scan_windows`]).

pub mod collection;
pub mod sequence;
pub mod signals;
pub mod windows;

pub use collection::{known_pattern_counts, KNOWN_PATTERNS};
pub use sequence::{binary_stream, sequence_string};
pub use signals::SimpleSequencePatterns;
pub use windows::{scan_windows, PatternWindow, WindowScan, WINDOW_LENGTH};
