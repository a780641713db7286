//! Agreement engine: inter-rater statistics over resolved labels for one characteristic.
//!
//! Insufficient data is never an error. Pairwise scores fall back to `0.0`;
//! Krippendorff's alpha returns `None` when no unit qualifies.

pub mod aggregate;
pub mod kappa;
pub mod krippendorff;
pub mod matrix;
pub mod percent;
pub mod strategy;

pub use aggregate::{per_tagger_agreement, TaggerAgreement};
pub use kappa::{cohens_kappa, kappa_from_pairs};
pub use krippendorff::{krippendorffs_alpha, CoincidenceMatrix};
pub use matrix::{agreement_matrix, AgreementMatrix};
pub use percent::{pairwise_percent_agreement, percent_agreement, percent_from_pairs};
pub use strategy::{strategy_for, LatestLabelCohensKappa, LatestLabelPercentAgreement};
