use crate::types::signals::PatternSignals;
use crate::types::{Characteristic, Tagger};

/// Whole-sequence pattern signals for one tagger on one characteristic.
pub trait PatternSignalsStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn analyze(&self, tagger: &Tagger, characteristic: &Characteristic) -> PatternSignals;
}
