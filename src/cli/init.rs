//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;

use womtrack::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};

/// Initialize a new womtrack.toml in the working directory.
pub fn init_command(work_dir: &Path, force: bool) -> Result<()> {
    let config_path = work_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
