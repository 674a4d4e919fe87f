use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{CommentKind, ScanOptions};

pub const CONFIG_FILE_NAME: &str = ".remarksrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_fetch_external")]
    pub fetch_external: bool,
    #[serde(default = "default_kinds")]
    pub kinds: Vec<CommentKind>,
    #[serde(default)]
    pub ignore_sources: Vec<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_fetch_external() -> bool {
    true
}

fn default_kinds() -> Vec<CommentKind> {
    CommentKind::ALL.to_vec()
}

fn default_user_agent() -> String {
    format!("remarks/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            fetch_external: default_fetch_external(),
            kinds: default_kinds(),
            ignore_sources: Vec::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `kinds` is empty or any pattern in
    /// `ignoreSources` is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.kinds.is_empty() {
            bail!("'kinds' must list at least one of: html, css, js");
        }

        for pattern in &self.ignore_sources {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'ignoreSources': \"{}\"", pattern)
            })?;
        }

        Ok(())
    }

    pub fn scan_options(&self) -> Result<ScanOptions> {
        let ignore_sources = self
            .ignore_sources
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignoreSources': \"{}\"", pattern)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanOptions {
            kinds: self.kinds.clone(),
            fetch_external: self.fetch_external,
            ignore_sources,
        })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
