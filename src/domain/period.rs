//! Reporting period windows

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named reporting window understood by the gains API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    FiveMin,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// Parses an API period string. Unknown values are a configuration
    /// error, so this returns `None` rather than guessing.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "five_min" => Some(Self::FiveMin),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Query-string value for the gained endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FiveMin => "five_min",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Heading form used in embed titles
    pub fn title(&self) -> &'static str {
        match self {
            Self::FiveMin => "5 Minute",
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
