use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{FetchOptions, DEFAULT_ARCHIVE_BASE};
use crate::models::Location;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub archive_base: String,
    pub force_ipv4: bool,
    pub user_agent: Option<String>,
    pub location: Option<Location>,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_base: DEFAULT_ARCHIVE_BASE.to_string(),
            force_ipv4: false,
            user_agent: None,
            location: None,
            render: RenderConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("outlook.svg"),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        if let Some(loc) = config.location {
            Location::new(loc.lon, loc.lat).context("Invalid location in config file")?;
        }
        Ok(config)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        let mut options = FetchOptions {
            archive_base: self.archive_base.clone(),
            force_ipv4: self.force_ipv4,
            ..FetchOptions::default()
        };
        if let Some(agent) = &self.user_agent {
            options.user_agent = agent.clone();
        }
        options
    }
}
