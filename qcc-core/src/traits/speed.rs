use crate::types::Tagger;

/// Estimates how quickly a tagger works.
///
/// Implementations must be pure: no I/O, no interior state, identical output
/// for identical input.
pub trait TaggingSpeedStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Mean log2 seconds between consecutive tags. Lower is faster.
    /// `0.0` when there is not enough data.
    fn speed_log2(&self, tagger: &Tagger) -> f64;

    /// Linear seconds per tag derived from [`Self::speed_log2`].
    fn seconds_per_tag(&self, tagger: &Tagger) -> f64;
}
