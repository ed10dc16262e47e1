//! Player records and the ordered registry

use super::{EfficiencyRecord, GainRecord};

/// Normalized gains for one player over one reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub username: String,
    /// Per-skill experience gains, excluding the overall aggregate
    pub experience_gains: Vec<GainRecord>,
    /// Per-boss kill-count gains
    pub boss_gains: Vec<GainRecord>,
    /// Per-activity score gains
    pub activity_gains: Vec<GainRecord>,
    /// Combined EHP/EHB gains
    pub efficiency: EfficiencyRecord,
}

impl PlayerRecord {
    /// Sum of per-skill experience gained this period
    pub fn total_experience(&self) -> f64 {
        self.experience_gains.iter().map(|gain| gain.gained).sum()
    }

    /// Sum of boss kills gained this period
    pub fn total_boss_kills(&self) -> f64 {
        self.boss_gains.iter().map(|gain| gain.gained).sum()
    }

    /// Sum of activity score gained this period
    pub fn total_activity_score(&self) -> f64 {
        self.activity_gains.iter().map(|gain| gain.gained).sum()
    }
}

/// Username-unique collection of player records that preserves insertion
/// order. Order is fetch order until the ranker rebuilds the registry in
/// ranked order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRegistry {
    records: Vec<PlayerRecord>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record keyed by its username. An existing entry for the
    /// same username is replaced in place, keeping its position.
    pub fn insert(&mut self, record: PlayerRecord) {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.username == record.username)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, username: &str) -> Option<&PlayerRecord> {
        self.records
            .iter()
            .find(|record| record.username == username)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in registry order
    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter()
    }

    /// Consumes the registry, yielding the records in registry order
    pub fn into_records(self) -> Vec<PlayerRecord> {
        self.records
    }
}

impl FromIterator<PlayerRecord> for PlayerRegistry {
    fn from_iter<I: IntoIterator<Item = PlayerRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.insert(record);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, experience: f64) -> PlayerRecord {
        PlayerRecord {
            username: username.to_string(),
            experience_gains: vec![GainRecord::new("attack", experience)],
            boss_gains: Vec::new(),
            activity_gains: Vec::new(),
            efficiency: EfficiencyRecord::default(),
        }
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut registry = PlayerRegistry::new();
        registry.insert(record("zezima", 100.0));
        registry.insert(record("b0aty", 200.0));
        registry.insert(record("alkan", 300.0));

        let order: Vec<&str> = registry.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(order, ["zezima", "b0aty", "alkan"]);
    }

    #[test]
    fn test_insert_replaces_existing_in_place() {
        let mut registry = PlayerRegistry::new();
        registry.insert(record("zezima", 100.0));
        registry.insert(record("b0aty", 200.0));
        registry.insert(record("zezima", 999.0));

        assert_eq!(registry.len(), 2);
        let order: Vec<&str> = registry.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(order, ["zezima", "b0aty"]);

        let updated = registry.get("zezima").expect("zezima should be present");
        assert_eq!(updated.total_experience(), 999.0);
    }

    #[test]
    fn test_totals_sum_each_category() {
        let player = PlayerRecord {
            username: "zezima".to_string(),
            experience_gains: vec![
                GainRecord::new("attack", 100.0),
                GainRecord::new("magic", 50.0),
            ],
            boss_gains: vec![GainRecord::new("zulrah", 12.0)],
            activity_gains: vec![
                GainRecord::new("bounty_hunter", 3.0),
                GainRecord::new("clue_scrolls_all", 7.0),
            ],
            efficiency: EfficiencyRecord::new(1.5, 0.5),
        };

        assert_eq!(player.total_experience(), 150.0);
        assert_eq!(player.total_boss_kills(), 12.0);
        assert_eq!(player.total_activity_score(), 10.0);
        assert_eq!(player.efficiency.gained, 2.0);
    }
}
