//! Ranking metric selection

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The dimension used to order players in the group ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingMetric {
    /// Total experience gained across all skills
    #[default]
    Experience,
    /// Total boss kills gained
    Boss,
    /// Total activity score gained
    Activity,
    /// Combined EHP + EHB gained
    Efficiency,
    /// Efficient hours played gained
    Ehp,
    /// Efficient hours bossed gained
    Ehb,
}

impl RankingMetric {
    /// Parses a configured metric name. Unrecognized values fold to
    /// [`RankingMetric::Experience`] so a typo never stops a run.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "experience" | "experience_gains" | "exp" | "xp" => Self::Experience,
            "boss" | "bosses" | "boss_gains" => Self::Boss,
            "activity" | "activities" | "activity_gains" => Self::Activity,
            "efficiency" | "efficiency_data" => Self::Efficiency,
            "ehp" => Self::Ehp,
            "ehb" => Self::Ehb,
            _ => Self::Experience,
        }
    }

    /// Canonical configuration spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Boss => "boss",
            Self::Activity => "activity",
            Self::Efficiency => "efficiency",
            Self::Ehp => "ehp",
            Self::Ehb => "ehb",
        }
    }

    /// Heading form used in the ranking embed title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Boss => "Boss",
            Self::Activity => "Activity",
            Self::Efficiency => "Efficiency",
            Self::Ehp => "EHP",
            Self::Ehb => "EHB",
        }
    }
}

impl fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RankingMetric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RankingMetric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}
