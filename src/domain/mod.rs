//! Core domain types for womtrack

mod gain;
mod metric;
mod period;
mod player;

pub use gain::{EfficiencyRecord, GainRecord};
pub use metric::RankingMetric;
pub use period::Period;
pub use player::{PlayerRecord, PlayerRegistry};
