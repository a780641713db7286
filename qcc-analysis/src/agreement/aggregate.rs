//! Per-tagger mean pairwise agreement.

use std::collections::BTreeMap;

use qcc_core::config::AgreementMetric;
use qcc_core::Tagger;
use tracing::debug;

use super::kappa::kappa_from_pairs;
use super::percent::percent_from_pairs;
use crate::resolver::resolve_latest;

/// `metric -> mean score` for one tagger.
pub type TaggerAgreement = BTreeMap<AgreementMetric, f64>;

/// Mean pairwise score of each tagger against every other tagger sharing at
/// least one resolved comment.
///
/// Taggers without any overlap are omitted. Metrics that are not defined
/// between two raters are skipped.
pub fn per_tagger_agreement(
    taggers: &[Tagger],
    characteristic_id: &str,
    metrics: &[AgreementMetric],
) -> BTreeMap<String, TaggerAgreement> {
    let labels = resolve_latest(taggers.iter().flat_map(Tagger::events), characteristic_id);
    let metrics: Vec<AgreementMetric> = metrics
        .iter()
        .copied()
        .filter(AgreementMetric::is_pairwise)
        .collect();

    let mut sums: BTreeMap<&str, (TaggerAgreement, usize)> = BTreeMap::new();
    for (i, a) in taggers.iter().enumerate() {
        for b in &taggers[i + 1..] {
            let pairs = labels.overlap(&a.id, &b.id);
            if pairs.is_empty() {
                continue;
            }
            for metric in &metrics {
                let score = match metric {
                    AgreementMetric::PercentAgreement => percent_from_pairs(&pairs),
                    AgreementMetric::CohensKappa => kappa_from_pairs(&pairs),
                    AgreementMetric::KrippendorffsAlpha => continue,
                };
                for id in [a.id.as_str(), b.id.as_str()] {
                    *sums.entry(id).or_default().0.entry(*metric).or_default() += score;
                }
            }
            for id in [a.id.as_str(), b.id.as_str()] {
                sums.entry(id).or_default().1 += 1;
            }
        }
    }

    debug!(
        characteristic_id,
        taggers = taggers.len(),
        with_overlap = sums.len(),
        "per-tagger agreement"
    );

    sums.into_iter()
        .map(|(id, (totals, partners))| {
            let means = totals
                .into_iter()
                .map(|(metric, total)| (metric, total / partners as f64))
                .collect();
            (id.to_string(), means)
        })
        .collect()
}
