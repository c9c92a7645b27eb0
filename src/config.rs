use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the optional configuration file looked up in the working
/// directory. All keys can also be set on the command line; CLI flags win.
pub const CONFIG_FILE_NAME: &str = "header-lint.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format (text, json)
    pub format: Option<String>,

    /// Exit with status 1 when violations were found
    pub strict: Option<bool>,

    /// Glob patterns for paths to skip
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Organization expected in the first copyright line
    pub copyright_holder: Option<String>,
}

/// Load configuration from `header-lint.toml` in the current directory.
/// A missing file yields the defaults; a malformed file is an error.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to resolve current directory")?;
    load_config_from(&current_dir)
}

pub fn load_config_from(dir: &Path) -> Result<Config> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    Ok(config)
}
