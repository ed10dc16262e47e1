//! Discord webhook delivery

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::embed::{Embed, BOT_NAME};

/// Webhook execution payload: the bot identity plus a single embed.
#[derive(Serialize)]
struct WebhookPayload<'a> {
    username: &'a str,
    embeds: [&'a Embed; 1],
}

/// Posts embeds to a Discord webhook, one execution per embed so a single
/// oversized or rejected document cannot sink the rest.
pub struct WebhookClient {
    agent: ureq::Agent,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            agent,
            url: url.into(),
        }
    }

    /// Delivers every embed in order, logging failures without aborting
    /// the run. Returns how many were accepted.
    pub fn deliver_all(&self, embeds: &[Embed]) -> usize {
        let mut delivered = 0;
        for embed in embeds {
            if self.deliver(embed) {
                delivered += 1;
            }
        }
        delivered
    }

    fn deliver(&self, embed: &Embed) -> bool {
        let payload = WebhookPayload {
            username: BOT_NAME,
            embeds: [embed],
        };

        match self.agent.post(&self.url).send_json(&payload) {
            Ok(_) => {
                debug!("Delivered embed '{}'", embed.title);
                true
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "<unreadable body>".to_string());
                warn!(
                    "Webhook returned status {} for embed '{}': {}",
                    status, embed.title, body
                );
                false
            }
            Err(err) => {
                warn!("Error delivering embed '{}': {}", embed.title, err);
                false
            }
        }
    }
}
