//! Configuration loading and management.
//!
//! Settings come from a TOML file (`womtrack.toml` next to the working
//! directory, falling back to `~/.womtrack/config.toml`), with the
//! deployment environment variables layered on top. The entry point loads
//! and validates once; the pipeline only ever sees the finished value.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{Period, RankingMetric};
use crate::wom::ApiSettings;

/// Name of the per-directory config file
pub const CONFIG_FILE_NAME: &str = "womtrack.toml";

/// Starter configuration written by `womtrack init`
pub const DEFAULT_CONFIG: &str = r#"# womtrack configuration
#
# Gains are pulled from the Wise Old Man API, active players are ranked,
# and the results are posted to a Discord webhook as embeds.

# Players to fetch, in reporting order
usernames = []

# Discord webhook endpoint the embeds are posted to
# webhook_url = "https://discord.com/api/webhooks/..."

# Reporting window: five_min, day, week, month, or year
period = "day"

# Ranking dimension: experience, boss, activity, efficiency, ehp, or ehb
metric = "experience"

# Post the group ranking embed
send_ranking = true

# Post one detail embed per active player
send_player_details = true

# Ask the tracker to refresh each player before reading gains
request_player_update = true

[api]
# base_url = "https://api.wiseoldman.net/v2/players"
# timeout_secs = 10
"#;

/// Runtime configuration for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Players to fetch, in reporting order
    #[serde(default)]
    pub usernames: Vec<String>,

    /// Discord webhook endpoint; required for delivery, unused by preview
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Reporting window for gains
    #[serde(default)]
    pub period: Period,

    /// Dimension players are ranked by
    #[serde(default)]
    pub metric: RankingMetric,

    /// Post the group ranking embed
    #[serde(default = "default_true")]
    pub send_ranking: bool,

    /// Post one detail embed per active player
    #[serde(default = "default_true")]
    pub send_player_details: bool,

    /// Ask the tracker to refresh each player before reading gains
    #[serde(default = "default_true")]
    pub request_player_update: bool,

    /// Tracker API connection settings
    #[serde(default)]
    pub api: ApiSettings,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            usernames: Vec::new(),
            webhook_url: None,
            period: Period::default(),
            metric: RankingMetric::default(),
            send_ranking: true,
            send_player_details: true,
            request_player_update: true,
            api: ApiSettings::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a specific TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Loads `womtrack.toml` from `dir`, falling back to the global
    /// config, then to defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local = dir.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::from_file(&local);
        }

        let global = Self::global_config_path();
        if global.exists() {
            return Self::from_file(&global);
        }

        Ok(Self::default())
    }

    /// Global config directory (~/.womtrack)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".womtrack")
    }

    /// Global config file path (~/.womtrack/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// File configuration (an explicit path, or the directory lookup) with
    /// environment overrides applied and usernames normalized.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => Self::from_dir(dir)?,
        };
        config.apply_env()?;
        config.normalize();
        Ok(config)
    }

    /// Applies the deployment environment variables over the file values.
    fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Applies override values from a keyed lookup over the file values.
    /// An unknown `PERIOD` is a hard error; an unknown `SORT_BY` folds to
    /// the experience metric.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(usernames) = var("USERNAMES") {
            self.usernames = usernames.split(',').map(str::to_string).collect();
        }
        if let Some(url) = var("WEBHOOK_URL") {
            self.webhook_url = Some(url);
        }
        if let Some(period) = var("PERIOD") {
            self.period = Period::parse(&period).with_context(|| {
                format!("Unknown PERIOD '{period}': expected five_min, day, week, month or year")
            })?;
        }
        if let Some(metric) = var("SORT_BY") {
            self.metric = RankingMetric::parse(&metric);
        }
        if let Some(flag) = var("SEND_RANKING_EMBED") {
            self.send_ranking = parse_bool(&flag);
        }
        if let Some(flag) = var("SEND_PLAYER_EMBED") {
            self.send_player_details = parse_bool(&flag);
        }
        if let Some(flag) = var("SEND_PLAYER_UPDATE") {
            self.request_player_update = parse_bool(&flag);
        }
        Ok(())
    }

    /// Trims usernames, drops empties, and de-duplicates keeping the
    /// first occurrence.
    fn normalize(&mut self) {
        let mut cleaned: Vec<String> = Vec::new();
        for name in std::mem::take(&mut self.usernames) {
            let trimmed = name.trim();
            if trimmed.is_empty() || cleaned.iter().any(|seen| seen == trimmed) {
                continue;
            }
            cleaned.push(trimmed.to_string());
        }
        self.usernames = cleaned;
    }

    /// Checks the minimum needed to run a batch at all.
    pub fn validate(&self) -> Result<()> {
        if self.usernames.is_empty() {
            bail!(
                "No usernames configured: set `usernames` in {CONFIG_FILE_NAME} \
                 or the USERNAMES environment variable"
            );
        }
        Ok(())
    }

    /// The webhook endpoint, required for delivery.
    pub fn require_webhook(&self) -> Result<&str> {
        match self.webhook_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => bail!(
                "No webhook configured: set `webhook_url` in {CONFIG_FILE_NAME} \
                 or the WEBHOOK_URL environment variable"
            ),
        }
    }
}

/// The deployment's boolean convention: only "true" (any case) enables.
fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
