//! [`AgreementStrategy`] implementations over latest labels.

use qcc_core::config::AgreementMetric;
use qcc_core::{AgreementStrategy, Characteristic, Tagger};

use super::{cohens_kappa, pairwise_percent_agreement};

/// Percent agreement on the latest label per comment, NA excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestLabelPercentAgreement;

impl AgreementStrategy for LatestLabelPercentAgreement {
    fn name(&self) -> &'static str {
        "latest_label_percent_agreement"
    }

    fn pairwise(&self, a: &Tagger, b: &Tagger, characteristic: &Characteristic) -> f64 {
        pairwise_percent_agreement(a, b, &characteristic.id)
    }
}

/// Cohen's kappa on the latest label per comment, NA excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestLabelCohensKappa;

impl AgreementStrategy for LatestLabelCohensKappa {
    fn name(&self) -> &'static str {
        "latest_label_cohens_kappa"
    }

    fn pairwise(&self, a: &Tagger, b: &Tagger, characteristic: &Characteristic) -> f64 {
        cohens_kappa(a, b, &characteristic.id)
    }
}

/// Strategy for a pairwise metric; `None` for population-only metrics.
pub fn strategy_for(metric: AgreementMetric) -> Option<Box<dyn AgreementStrategy>> {
    match metric {
        AgreementMetric::PercentAgreement => Some(Box::new(LatestLabelPercentAgreement)),
        AgreementMetric::CohensKappa => Some(Box::new(LatestLabelCohensKappa)),
        AgreementMetric::KrippendorffsAlpha => None,
    }
}
