//! Per-characteristic reliability.

use std::collections::BTreeMap;

use qcc_core::config::{AgreementMetric, QccConfig};
use qcc_core::{Characteristic, TagAssignment, TagValue};
use serde::Serialize;
use tracing::warn;

use crate::agreement::{agreement_matrix, krippendorffs_alpha, percent_agreement, AgreementMatrix};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicReliability {
    pub characteristic_id: String,
    pub name: String,
    pub num_taggers: usize,
    pub num_assignments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub krippendorffs_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_agreement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevalence: Option<BTreeMap<TagValue, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_matrix: Option<AgreementMatrix>,
    /// Alpha is defined and below `agreement.min_agreement`.
    pub below_min_agreement: bool,
}

pub fn characteristic_reliability(
    assignments: &[TagAssignment],
    characteristic: &Characteristic,
    config: &QccConfig,
) -> CharacteristicReliability {
    let include_agreement = config.reporting.include_agreement;
    let wants = |metric: AgreementMetric| {
        include_agreement && config.agreement.methods.contains(&metric)
    };

    let krippendorffs_alpha = if wants(AgreementMetric::KrippendorffsAlpha) {
        krippendorffs_alpha(assignments, &characteristic.id)
    } else {
        None
    };
    let percent_agreement = wants(AgreementMetric::PercentAgreement)
        .then(|| percent_agreement(assignments, &characteristic.id));
    let agreement_matrix =
        include_agreement.then(|| agreement_matrix(assignments, &characteristic.id));
    let prevalence = config
        .reporting
        .include_prevalence
        .then(|| characteristic.prevalence(assignments));

    let below_min_agreement =
        krippendorffs_alpha.is_some_and(|alpha| alpha < config.agreement.min_agreement);
    if below_min_agreement {
        warn!(
            characteristic_id = %characteristic.id,
            alpha = ?krippendorffs_alpha,
            min_agreement = config.agreement.min_agreement,
            "characteristic below minimum agreement"
        );
    }

    CharacteristicReliability {
        characteristic_id: characteristic.id.clone(),
        name: characteristic.name.clone(),
        num_taggers: characteristic.num_unique_taggers(assignments),
        num_assignments: assignments
            .iter()
            .filter(|a| a.characteristic_id() == characteristic.id)
            .count(),
        krippendorffs_alpha,
        percent_agreement,
        prevalence,
        agreement_matrix,
        below_min_agreement,
    }
}
