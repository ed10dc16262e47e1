//! Group ranking summary composer

use crate::domain::{Period, PlayerRegistry, RankingMetric};

use super::format::group_digits;
use super::{Embed, BOT_NAME};

/// Labeled values shown for each player, primary metric first. Boss and
/// activity sorts share the experience layout since their totals already
/// decided the ordering.
fn metric_lines(metric: RankingMetric, exp: f64, ehp: f64, ehb: f64) -> Vec<(&'static str, f64)> {
    match metric {
        RankingMetric::Experience | RankingMetric::Boss | RankingMetric::Activity => {
            vec![("EXP", exp), ("EHP", ehp), ("EHB", ehb)]
        }
        RankingMetric::Efficiency => vec![("EHP+EHB", ehp + ehb), ("EXP", exp)],
        RankingMetric::Ehp => vec![("EHP", ehp), ("EXP", exp), ("EHB", ehb)],
        RankingMetric::Ehb => vec![("EHB", ehb), ("EXP", exp), ("EHP", ehp)],
    }
}

/// Builds the group ranking embed with one field per player, in ranked
/// order. Returns `None` when the registry is empty.
pub fn build_ranking_summary(
    ranked: &PlayerRegistry,
    period: Period,
    metric: RankingMetric,
) -> Option<Embed> {
    if ranked.is_empty() {
        return None;
    }

    let mut embed = Embed::new(format!(
        "{} Group Ranking by {}",
        period.title(),
        metric.title()
    ));
    embed.set_description(format!(
        "Here is the {} activity ranking for the group.",
        period.title().to_lowercase()
    ));
    embed.set_author(BOT_NAME, None);
    embed.set_footer(format!("Player Rankings - Generated by {BOT_NAME}"));

    for (idx, record) in ranked.iter().enumerate() {
        let lines: Vec<String> = metric_lines(
            metric,
            record.total_experience(),
            record.efficiency.ehp,
            record.efficiency.ehb,
        )
        .into_iter()
        .map(|(label, value)| format!("{}: `{}`", label, group_digits(value)))
        .collect();

        embed.add_field(format!("#{} {}", idx + 1, record.username), lines.join("\n"));
    }

    Some(embed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EfficiencyRecord, GainRecord, PlayerRecord};

    fn player(username: &str, experience: f64, ehp: f64, ehb: f64) -> PlayerRecord {
        PlayerRecord {
            username: username.to_string(),
            experience_gains: vec![GainRecord::new("attack", experience)],
            boss_gains: Vec::new(),
            activity_gains: Vec::new(),
            efficiency: EfficiencyRecord::new(ehp, ehb),
        }
    }

    #[test]
    fn test_empty_registry_has_no_summary() {
        let registry = PlayerRegistry::new();
        assert!(build_ranking_summary(&registry, Period::Day, RankingMetric::Experience).is_none());
    }

    #[test]
    fn test_summary_headline_and_fields() {
        let registry: PlayerRegistry = vec![
            player("zezima", 1_000_000.0, 2.5, 0.0),
            player("b0aty", 500.0, 0.0, 1.0),
        ]
        .into_iter()
        .collect();

        let embed = build_ranking_summary(&registry, Period::Week, RankingMetric::Experience)
            .expect("registry is not empty");

        assert_eq!(embed.title, "Week Group Ranking by Experience");
        assert_eq!(
            embed.description.as_deref(),
            Some("Here is the week activity ranking for the group.")
        );
        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[0].name, "#1 zezima");
        assert_eq!(embed.fields[0].value, "EXP: `1,000,000`\nEHP: `2.5`\nEHB: `0`");
        assert!(!embed.fields[0].inline);
        assert_eq!(embed.fields[1].name, "#2 b0aty");

        let author = embed.author.expect("summary has an author");
        assert_eq!(author.name, BOT_NAME);
        assert_eq!(author.url, None);

        let footer = embed.footer.expect("summary has a footer");
        assert_eq!(footer.text, "Player Rankings - Generated by Osrs Activity Bot");
    }

    #[test]
    fn test_efficiency_sort_leads_with_combined_total() {
        let registry: PlayerRegistry =
            vec![player("zezima", 100.0, 1.5, 0.5)].into_iter().collect();

        let embed = build_ranking_summary(&registry, Period::Day, RankingMetric::Efficiency)
            .expect("registry is not empty");

        assert_eq!(embed.title, "Day Group Ranking by Efficiency");
        assert_eq!(embed.fields[0].value, "EHP+EHB: `2`\nEXP: `100`");
    }

    #[test]
    fn test_ehp_sort_leads_with_ehp() {
        let registry: PlayerRegistry =
            vec![player("zezima", 100.0, 1.5, 0.5)].into_iter().collect();

        let embed = build_ranking_summary(&registry, Period::Day, RankingMetric::Ehp)
            .expect("registry is not empty");

        assert_eq!(embed.title, "Day Group Ranking by EHP");
        assert_eq!(
            embed.fields[0].value,
            "EHP: `1.5`\nEXP: `100`\nEHB: `0.5`"
        );
    }

    #[test]
    fn test_boss_sort_reuses_experience_layout() {
        let registry: PlayerRegistry =
            vec![player("zezima", 100.0, 0.0, 0.0)].into_iter().collect();

        let embed = build_ranking_summary(&registry, Period::Day, RankingMetric::Boss)
            .expect("registry is not empty");

        assert_eq!(embed.title, "Day Group Ranking by Boss");
        assert!(embed.fields[0].value.starts_with("EXP: "));
    }

    #[test]
    fn test_five_minute_description_lowercases_title() {
        let registry: PlayerRegistry =
            vec![player("zezima", 100.0, 0.0, 0.0)].into_iter().collect();

        let embed = build_ranking_summary(&registry, Period::FiveMin, RankingMetric::Experience)
            .expect("registry is not empty");

        assert_eq!(embed.title, "5 Minute Group Ranking by Experience");
        assert_eq!(
            embed.description.as_deref(),
            Some("Here is the 5 minute activity ranking for the group.")
        );
    }
}
