//! Category extraction from gained documents

use serde_json::Value;

use super::path::{nested, nested_f64};
use crate::domain::{EfficiencyRecord, GainRecord};

/// Key carrying the per-entry metric slug in every category section
const NAME_KEY: &str = "metric";

/// Fallback name for entries missing their metric slug
const UNKNOWN_NAME: &str = "Unknown";

/// The aggregate skill row. Classification reads it; per-skill extraction
/// skips it so totals are not double counted.
const OVERALL: &str = "overall";

/// Collects the positive gains from one category section of a gained
/// document.
///
/// Entries that are not objects, whose key appears in `exclude`, or whose
/// value at `value_path` is missing, non-numeric, or not above zero are
/// skipped. A missing or non-object section yields an empty list.
pub fn extract_category(
    doc: &Value,
    section: &str,
    value_path: &[&str],
    name_field: &str,
    exclude: &[&str],
) -> Vec<GainRecord> {
    let mut gains = Vec::new();
    let Some(entries) = nested(doc, &["data", section]).and_then(Value::as_object) else {
        return gains;
    };

    for (key, entry) in entries {
        if exclude.contains(&key.as_str()) || !entry.is_object() {
            continue;
        }
        let Some(gained) = nested_f64(entry, value_path) else {
            continue;
        };
        if gained > 0.0 {
            let name = entry
                .get(name_field)
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_NAME);
            gains.push(GainRecord::new(name, gained));
        }
    }

    gains
}

/// Per-skill experience gains, excluding the overall aggregate.
pub fn experience_gains(doc: &Value) -> Vec<GainRecord> {
    extract_category(doc, "skills", &["experience", "gained"], NAME_KEY, &[OVERALL])
}

/// Per-boss kill-count gains.
pub fn boss_gains(doc: &Value) -> Vec<GainRecord> {
    extract_category(doc, "bosses", &["kills", "gained"], NAME_KEY, &[])
}

/// Per-activity score gains.
pub fn activity_gains(doc: &Value) -> Vec<GainRecord> {
    extract_category(doc, "activities", &["score", "gained"], NAME_KEY, &[])
}

/// Combined EHP/EHB efficiency gains.
///
/// Always produces a record; a missing or malformed component coerces to
/// zero instead of dropping the record.
pub fn extract_efficiency(doc: &Value) -> EfficiencyRecord {
    let ehp = nested_f64(doc, &["data", "computed", "ehp", "value", "gained"]).unwrap_or(0.0);
    let ehb = nested_f64(doc, &["data", "computed", "ehb", "value", "gained"]).unwrap_or(0.0);
    EfficiencyRecord::new(ehp, ehb)
}
