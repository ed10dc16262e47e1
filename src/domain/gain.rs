//! Per-entry and efficiency gain records

/// One positive stat delta for a single skill, boss, or activity.
///
/// Extraction only materializes strictly positive gains, so a record's
/// `gained` is always above zero.
#[derive(Debug, Clone, PartialEq)]
pub struct GainRecord {
    /// Metric slug as reported by the API (e.g. "attack", "zulrah")
    pub name: String,
    /// Amount gained over the reporting period
    pub gained: f64,
}

impl GainRecord {
    pub fn new(name: impl Into<String>, gained: f64) -> Self {
        Self {
            name: name.into(),
            gained,
        }
    }
}

/// Combined efficiency gains for one player over the period.
///
/// Unlike the per-entry categories there is exactly one of these per player,
/// present even when both components are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyRecord {
    /// Efficient hours played gained
    pub ehp: f64,
    /// Efficient hours bossed gained
    pub ehb: f64,
    /// Sum of both components
    pub gained: f64,
}

impl EfficiencyRecord {
    pub fn new(ehp: f64, ehb: f64) -> Self {
        Self {
            ehp,
            ehb,
            gained: ehp + ehb,
        }
    }
}

impl Default for EfficiencyRecord {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
