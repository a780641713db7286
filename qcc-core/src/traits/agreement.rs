use crate::types::{Characteristic, Tagger};

/// Pairwise agreement between two taggers on one characteristic.
pub trait AgreementStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Score in `[0, 1]` for bounded metrics; `0.0` when the pair never overlaps.
    fn pairwise(&self, a: &Tagger, b: &Tagger, characteristic: &Characteristic) -> f64;
}
