//! Player record assembly

use serde_json::Value;

use super::extract::{activity_gains, boss_gains, experience_gains, extract_efficiency};
use crate::domain::PlayerRecord;

/// Merges a username and its raw gained document into one normalized
/// record. Pure: the same inputs always produce an equal record.
///
/// Callers are expected to check [`is_active`](super::is_active) first and
/// skip building records for inactive players.
pub fn build_player(username: &str, doc: &Value) -> PlayerRecord {
    PlayerRecord {
        username: username.to_string(),
        experience_gains: experience_gains(doc),
        boss_gains: boss_gains(doc),
        activity_gains: activity_gains(doc),
        efficiency: extract_efficiency(doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_player_fills_every_category() {
        let doc = json!({
            "data": {
                "skills": {
                    "overall": {"metric": "overall", "experience": {"gained": 600}},
                    "attack": {"metric": "attack", "experience": {"gained": 600}},
                },
                "bosses": {
                    "zulrah": {"metric": "zulrah", "kills": {"gained": 4}},
                },
                "activities": {
                    "clue_scrolls_all": {"metric": "clue_scrolls_all", "score": {"gained": 2}},
                },
                "computed": {
                    "ehp": {"value": {"gained": 0.5}},
                    "ehb": {"value": {"gained": 0.25}},
                }
            }
        });

        let player = build_player("zezima", &doc);
        assert_eq!(player.username, "zezima");
        assert_eq!(player.total_experience(), 600.0);
        assert_eq!(player.total_boss_kills(), 4.0);
        assert_eq!(player.total_activity_score(), 2.0);
        assert_eq!(player.efficiency.gained, 0.75);
    }

    #[test]
    fn test_build_player_is_deterministic() {
        let doc = json!({
            "data": {
                "skills": {
                    "attack": {"metric": "attack", "experience": {"gained": 100}},
                }
            }
        });

        assert_eq!(build_player("zezima", &doc), build_player("zezima", &doc));
    }

    #[test]
    fn test_build_player_from_empty_document() {
        let player = build_player("zezima", &json!({}));
        assert!(player.experience_gains.is_empty());
        assert!(player.boss_gains.is_empty());
        assert!(player.activity_gains.is_empty());
        assert_eq!(player.efficiency.gained, 0.0);
    }
}
