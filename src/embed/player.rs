//! Per-player detail composer

use crate::domain::{Period, PlayerRecord};
use crate::wom::player_gained_url;

use super::format::{capitalize, group_digits, humanize};
use super::{Embed, BOT_NAME};

/// Builds one player's gains detail embed: a field per skill, boss, and
/// activity entry, plus EHP/EHB fields when those moved. Returns `None`
/// when the record has nothing above zero to show.
pub fn build_player_detail(record: &PlayerRecord, period: Period) -> Option<Embed> {
    let mut embed = Embed::new(format!("{} Gains for {}", period.title(), record.username));
    embed.set_author(
        &record.username,
        Some(player_gained_url(&record.username, period)),
    );
    embed.set_footer(format!(
        "Details for {} - Generated by {}",
        record.username, BOT_NAME
    ));

    for gain in &record.experience_gains {
        if gain.gained > 0.0 {
            embed.add_field(
                capitalize(&gain.name),
                format!("{} xp", group_digits(gain.gained)),
            );
        }
    }
    for gain in &record.boss_gains {
        if gain.gained > 0.0 {
            embed.add_field(
                humanize(&gain.name),
                format!("{} kills", group_digits(gain.gained)),
            );
        }
    }
    for gain in &record.activity_gains {
        if gain.gained > 0.0 {
            embed.add_field(
                humanize(&gain.name),
                format!("{} score", group_digits(gain.gained)),
            );
        }
    }
    if record.efficiency.ehp > 0.0 {
        embed.add_field("EHP Gained", format!("`{}`", group_digits(record.efficiency.ehp)));
    }
    if record.efficiency.ehb > 0.0 {
        embed.add_field("EHB Gained", format!("`{}`", group_digits(record.efficiency.ehb)));
    }

    if embed.fields.is_empty() {
        None
    } else {
        Some(embed)
    }
}
