//! Run command implementation

use anyhow::Result;
use std::path::Path;

use womtrack::config::Config;
use womtrack::pipeline::run_batch;
use womtrack::webhook::WebhookClient;
use womtrack::wom::WomClient;

/// Fetch gains for the configured group, compose the embeds, and post
/// them to the Discord webhook.
pub fn run_command(work_dir: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path, work_dir)?;
    config.validate()?;
    // Fail on a missing webhook before any network traffic happens
    let webhook_url = config.require_webhook()?.to_string();

    let client = WomClient::new(&config.api);
    let report = run_batch(&config, &client);

    let mut delivered = 0;
    if !report.embeds.is_empty() {
        let webhook = WebhookClient::new(webhook_url);
        delivered = webhook.deliver_all(&report.embeds);
    }

    println!(
        "Data processed for {} active players ({} of {} embeds delivered).",
        report.processed,
        delivered,
        report.embeds.len()
    );

    Ok(())
}
