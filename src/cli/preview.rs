//! Preview command implementation

use anyhow::Result;
use std::path::Path;

use womtrack::config::Config;
use womtrack::pipeline::run_batch;
use womtrack::wom::WomClient;

/// Fetch gains and print the composed embeds as JSON instead of
/// delivering them. Useful for checking a config before pointing it at a
/// live webhook.
pub fn preview_command(work_dir: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path, work_dir)?;
    config.validate()?;

    let client = WomClient::new(&config.api);
    let report = run_batch(&config, &client);

    if report.embeds.is_empty() {
        println!("No embeds to preview ({} active players).", report.processed);
        return Ok(());
    }

    for embed in &report.embeds {
        println!("{}", serde_json::to_string_pretty(embed)?);
    }
    println!(
        "{} embeds for {} active players.",
        report.embeds.len(),
        report.processed
    );

    Ok(())
}
