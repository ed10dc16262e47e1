//! Metric-keyed player ordering

use std::cmp::Ordering;

use tracing::warn;

use crate::domain::{PlayerRecord, PlayerRegistry, RankingMetric};

/// The score backing a record's rank position under the given metric.
pub fn score(record: &PlayerRecord, metric: RankingMetric) -> f64 {
    match metric {
        RankingMetric::Experience => record.total_experience(),
        RankingMetric::Boss => record.total_boss_kills(),
        RankingMetric::Activity => record.total_activity_score(),
        RankingMetric::Efficiency => record.efficiency.gained,
        RankingMetric::Ehp => record.efficiency.ehp,
        RankingMetric::Ehb => record.efficiency.ehb,
    }
}

/// Reorders the registry descending by metric score.
///
/// The sort is stable, so equal scores keep their fetch order. Registries
/// of size zero or one are returned untouched without computing a single
/// score. A registry containing a non-comparable score (NaN leaking out of
/// a degenerate document) is returned in its original order with a warning
/// rather than failing the batch.
pub fn rank_players(registry: PlayerRegistry, metric: RankingMetric) -> PlayerRegistry {
    if registry.len() <= 1 {
        return registry;
    }

    let mut keyed: Vec<(f64, PlayerRecord)> = registry
        .into_records()
        .into_iter()
        .map(|record| (score(&record, metric), record))
        .collect();

    if keyed.iter().any(|(value, _)| value.is_nan()) {
        warn!(
            "Could not rank players by '{}': non-comparable score, keeping fetch order",
            metric
        );
        return keyed.into_iter().map(|(_, record)| record).collect();
    }

    keyed.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, record)| record).collect()
}
