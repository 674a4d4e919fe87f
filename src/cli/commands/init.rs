use std::{env, fs, path::Path};

use anyhow::{Context, Result};

use crate::cli::{exit_status::ExitStatus, report};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<ExitStatus> {
    init_in(&env::current_dir()?)
}

/// Write the default config into `dir`. An existing file is never replaced.
pub fn init_in(dir: &Path) -> Result<ExitStatus> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Error);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    report::print_created(CONFIG_FILE_NAME);

    Ok(ExitStatus::Success)
}
