//! TOML configuration parsing and validation.
//!
//! ```toml
//! [catalog]
//! path = "data/phones.json"
//!
//! [server]
//! bind = "127.0.0.1:3000"
//!
//! [responses]
//! summary_limit = 5
//! max_cards = 12
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! `[responses]` and `[logging]` are optional.

use anyhow::{Context, Result};
use phone_finder_core::ResponseOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub responses: ResponsesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON file holding the phone records. Relative paths resolve against
    /// the working directory.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResponsesConfig {
    #[serde(default = "default_summary_limit")]
    pub summary_limit: usize,
    #[serde(default)]
    pub max_cards: Option<usize>,
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            summary_limit: default_summary_limit(),
            max_cards: None,
        }
    }
}

fn default_summary_limit() -> usize {
    5
}

impl ResponsesConfig {
    pub fn to_options(&self) -> ResponseOptions {
        ResponseOptions {
            summary_limit: self.summary_limit,
            max_cards: self.max_cards,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    if config.catalog.path.as_os_str().is_empty() {
        anyhow::bail!("catalog.path must not be empty");
    }

    if config.responses.summary_limit == 0 {
        anyhow::bail!("responses.summary_limit must be >= 1");
    }

    if config.responses.max_cards == Some(0) {
        anyhow::bail!("responses.max_cards must be >= 1 when set");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> Result<Config> {
        let config: Config = toml::from_str(toml_str)?;
        validate(&config)?;
        Ok(config)
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cfg = parse(
            r#"
[catalog]
path = "data/phones.json"

[server]
bind = "127.0.0.1:3000"
"#,
        )
        .unwrap();
        assert_eq!(cfg.responses.summary_limit, 5);
        assert_eq!(cfg.responses.max_cards, None);
        assert_eq!(cfg.logging.filter, "info");
        assert_eq!(cfg.responses.to_options(), ResponseOptions::default());
    }

    #[test]
    fn test_zero_summary_limit_rejected() {
        let err = parse(
            r#"
[catalog]
path = "data/phones.json"

[server]
bind = "127.0.0.1:3000"

[responses]
summary_limit = 0
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("summary_limit"));
    }

    #[test]
    fn test_zero_max_cards_rejected() {
        let err = parse(
            r#"
[catalog]
path = "data/phones.json"

[server]
bind = "127.0.0.1:3000"

[responses]
max_cards = 0
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("max_cards"));
    }

    #[test]
    fn test_missing_catalog_section_rejected() {
        assert!(parse("[server]\nbind = \"127.0.0.1:3000\"\n").is_err());
    }
}
