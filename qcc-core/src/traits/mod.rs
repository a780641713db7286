//! Strategy traits selected at runtime by the report layer.

pub mod agreement;
pub mod pattern;
pub mod speed;

pub use agreement::AgreementStrategy;
pub use pattern::PatternSignalsStrategy;
pub use speed::TaggingSpeedStrategy;
