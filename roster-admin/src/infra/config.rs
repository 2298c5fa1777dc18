use std::path::{Path, PathBuf};
use std::str::FromStr;

use roster_core::{ConfigError, ListConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

const APP_DIR: &str = "roster-admin";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("No configuration directory on this platform")]
    NoConfigDir,

    #[error("Failed to write configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source_url: String,
    pub list: ListConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            list: ListConfig::default(),
        }
    }
}

impl Config {
    /// `<config_dir>/roster-admin/config.json`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn load() -> Self {
        let path = Self::default_path();
        Self::load_from(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Read the file at `path` (missing or unreadable means defaults), then
    /// apply `ROSTER_*` overrides resolved through `lookup`.
    pub fn load_from(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = path.map(Self::read_file).unwrap_or_default();
        config.apply_overrides(lookup);
        config
    }

    fn read_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Config>(&content) {
                Ok(config) => {
                    log::debug!("Loaded configuration from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "Ignoring malformed configuration {}: {}",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Failed to read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ROSTER_SOURCE_URL") {
            let url = url.trim();
            if url.is_empty() {
                log::warn!("ROSTER_SOURCE_URL is empty, keeping {}", self.source_url);
            } else {
                self.source_url = url.to_string();
            }
        }

        if let Some(raw) = lookup("ROSTER_PAGE_SIZE") {
            let parsed = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::UnknownValue {
                    setting: "page size",
                    value: raw.clone(),
                })
                .and_then(|size| self.list.with_page_size(size));
            match parsed {
                Ok(list) => self.list = list,
                Err(err) => log::warn!("ROSTER_PAGE_SIZE: {}", err),
            }
        }

        if let Some(policy) = parse_override(&lookup, "ROSTER_PAGE_POLICY") {
            self.list = self.list.with_page_policy(policy);
        }
        if let Some(scope) = parse_override(&lookup, "ROSTER_SELECT_ALL") {
            self.list = self.list.with_select_all_scope(scope);
        }
        if let Some(policy) = parse_override(&lookup, "ROSTER_EMPTY_SELECTION") {
            self.list = self.list.with_empty_selection(policy);
        }
        if let Some(trigger) = parse_override(&lookup, "ROSTER_SEARCH_TRIGGER") {
            self.list = self.list.with_search_trigger(trigger);
        }
    }

    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = Self::default_path().ok_or(ConfigFileError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }
}

fn parse_override<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr<Err = ConfigError>,
{
    let raw = lookup(key)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{}: {}", key, err);
            None
        }
    }
}
