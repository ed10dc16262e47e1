//! The batch run: fetch, classify, build, rank, compose

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::PlayerRegistry;
use crate::embed::{build_player_detail, build_ranking_summary, Embed};
use crate::gains::{build_player, is_active};
use crate::rank::rank_players;
use crate::wom::GainsSource;

/// Outcome of one batch run: how many active players made it into the
/// registry and the documents composed for them, ranking summary first.
#[derive(Debug)]
pub struct BatchReport {
    pub processed: usize,
    pub embeds: Vec<Embed>,
}

/// Runs one sequential batch over the configured usernames.
///
/// Players are fetched in configuration order. A fetch failure is logged
/// and skips that player; the run itself always completes with a report.
pub fn run_batch(config: &Config, source: &dyn GainsSource) -> BatchReport {
    let mut registry = PlayerRegistry::new();

    for username in &config.usernames {
        if config.request_player_update {
            // The tracker refreshes asynchronously, so this only nudges it.
            if let Err(err) = source.request_update(username) {
                debug!("Update request for '{}' failed: {}", username, err);
            }
        }

        let doc = match source.fetch_gained(username, config.period) {
            Ok(doc) => doc,
            Err(err) => {
                warn!("Error fetching data for '{}': {}", username, err);
                continue;
            }
        };

        if is_active(&doc) {
            registry.insert(build_player(username, &doc));
        } else {
            debug!("'{}' had no overall experience gain, skipping", username);
        }
    }

    let processed = registry.len();
    if processed == 0 {
        info!("No active players found");
        return BatchReport {
            processed,
            embeds: Vec::new(),
        };
    }

    let ranked = rank_players(registry, config.metric);
    let mut embeds = Vec::new();

    if config.send_ranking {
        if let Some(summary) = build_ranking_summary(&ranked, config.period, config.metric) {
            embeds.push(summary);
        }
    }
    if config.send_player_details {
        embeds.extend(
            ranked
                .iter()
                .filter_map(|record| build_player_detail(record, config.period)),
        );
    }

    info!("Data processed for {} active players", processed);
    BatchReport { processed, embeds }
}
