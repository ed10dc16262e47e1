//! Shared test fixtures for tracker-shaped gained documents

use serde_json::{json, Map, Value};

/// Builds a gained document in the tracker's response shape.
///
/// `skills` holds (metric, experience gained) pairs and the overall row is
/// derived by summing them; `bosses` and `activities` follow the same
/// pattern for kills and score.
pub fn gained_doc(
    skills: &[(&str, f64)],
    bosses: &[(&str, f64)],
    activities: &[(&str, f64)],
    ehp: f64,
    ehb: f64,
) -> Value {
    let mut skill_map = Map::new();
    let overall: f64 = skills.iter().map(|(_, gained)| gained).sum();
    skill_map.insert(
        "overall".to_string(),
        json!({"metric": "overall", "experience": {"gained": overall}}),
    );
    for (metric, gained) in skills {
        skill_map.insert(
            (*metric).to_string(),
            json!({"metric": metric, "experience": {"gained": gained}}),
        );
    }

    let mut boss_map = Map::new();
    for (metric, gained) in bosses {
        boss_map.insert(
            (*metric).to_string(),
            json!({"metric": metric, "kills": {"gained": gained}}),
        );
    }

    let mut activity_map = Map::new();
    for (metric, gained) in activities {
        activity_map.insert(
            (*metric).to_string(),
            json!({"metric": metric, "score": {"gained": gained}}),
        );
    }

    json!({
        "startsAt": "2024-03-01T00:00:00.000Z",
        "endsAt": "2024-03-02T00:00:00.000Z",
        "data": {
            "skills": skill_map,
            "bosses": boss_map,
            "activities": activity_map,
            "computed": {
                "ehp": {"metric": "ehp", "value": {"gained": ehp}},
                "ehb": {"metric": "ehb", "value": {"gained": ehb}},
            },
        }
    })
}
