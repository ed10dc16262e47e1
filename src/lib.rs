//! womtrack - OSRS group activity digests
//!
//! womtrack pulls per-player gained snapshots from the Wise Old Man API,
//! keeps the players whose overall experience actually moved over the
//! period, ranks them by a configurable metric, and composes Discord
//! embeds: one group ranking plus a detail card per active player.
//! Delivery goes through a standard Discord webhook.
//!
//! ## Pipeline
//!
//! 1. **Fetch** (`wom`): one gained document per configured username.
//! 2. **Normalize** (`gains`): defensive extraction into typed records.
//! 3. **Rank** (`rank`): stable ordering by the configured metric.
//! 4. **Compose** (`embed`): ranking summary plus per-player details.
//! 5. **Deliver** (`webhook`): one webhook execution per embed.

pub mod config;
pub mod domain;
pub mod embed;
pub mod gains;
pub mod pipeline;
pub mod rank;
pub mod webhook;
pub mod wom;

pub use domain::*;
