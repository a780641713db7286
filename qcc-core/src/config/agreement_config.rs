use std::fmt;

use serde::{Deserialize, Serialize};

use super::check_unit_interval;
use crate::errors::ConfigError;

/// Agreement statistics that reports can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementMetric {
    PercentAgreement,
    CohensKappa,
    KrippendorffsAlpha,
}

impl AgreementMetric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PercentAgreement => "percent_agreement",
            Self::CohensKappa => "cohens_kappa",
            Self::KrippendorffsAlpha => "krippendorffs_alpha",
        }
    }

    /// Whether the metric is defined between two taggers.
    pub fn is_pairwise(&self) -> bool {
        !matches!(self, Self::KrippendorffsAlpha)
    }
}

impl fmt::Display for AgreementMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Agreement engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgreementConfig {
    pub methods: Vec<AgreementMetric>,
    /// Characteristics whose alpha falls below this are flagged.
    pub min_agreement: f64,
}

impl Default for AgreementConfig {
    fn default() -> Self {
        Self {
            methods: vec![
                AgreementMetric::PercentAgreement,
                AgreementMetric::CohensKappa,
                AgreementMetric::KrippendorffsAlpha,
            ],
            min_agreement: 0.7,
        }
    }
}

impl AgreementConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_interval("agreement.min_agreement", self.min_agreement)
    }

    /// Configured metrics that apply to a pair of taggers.
    pub fn pairwise_methods(&self) -> impl Iterator<Item = AgreementMetric> + '_ {
        self.methods.iter().copied().filter(AgreementMetric::is_pairwise)
    }
}
