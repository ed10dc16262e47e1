//! Activity classification

use serde_json::Value;

use super::path::nested_f64;

/// A player counts as active when their overall experience gain for the
/// period is strictly positive. Missing or malformed documents classify
/// as inactive.
pub fn is_active(doc: &Value) -> bool {
    nested_f64(doc, &["data", "skills", "overall", "experience", "gained"])
        .is_some_and(|gained| gained > 0.0)
}
