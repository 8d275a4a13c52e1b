use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::porkbun::{Credentials, DEFAULT_BASE_URL};

pub const API_KEY_VAR: &str = "PORKBUN_API_KEY";
pub const SECRET_KEY_VAR: &str = "PORKBUN_SECRET_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("'{0}' is missing, set it in the config file or through {1}")]
    MissingKey(&'static str, &'static str),
    #[error("base_url '{0}' must start with http:// or https://")]
    BadBaseUrl(String),
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub secret_api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Config {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.api_key, &self.secret_api_key)
    }

    /// Replaces the keys with any non-empty values `lookup` finds for
    /// `PORKBUN_API_KEY` and `PORKBUN_SECRET_KEY`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_VAR).filter(|v| !v.is_empty()) {
            self.api_key = key;
        }
        if let Some(key) = lookup(SECRET_KEY_VAR).filter(|v| !v.is_empty()) {
            self.secret_api_key = key;
        }
    }
}

pub fn config_path(explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(path),
        None => ProjectDirs::from("com", "porkbun", "porkbun-txt")
            .map(|dir| dir.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("porkbun-txt.toml"),
    }
}

/// Reads the config file, then lets the environment override the keys.
///
/// A missing file at the default location is fine as long as the keys come
/// from the environment. A file passed explicitly has to exist.
pub fn load_config(explicit: Option<&str>) -> Result<Config, ConfigError> {
    let path = config_path(explicit);
    let mut config = match fs::read_to_string(&path) {
        Ok(contents) => toml::from_str(&contents)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            log::debug!("No config file at {}, using defaults", path.display());
            Config {
                base_url: default_base_url(),
                ..Config::default()
            }
        }
        Err(err) => return Err(ConfigError::Read(path, err)),
    };
    config.apply_env(|name| std::env::var(name).ok());
    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.api_key.is_empty() {
        return Err(ConfigError::MissingKey("api_key", API_KEY_VAR));
    }
    if config.secret_api_key.is_empty() {
        return Err(ConfigError::MissingKey("secret_api_key", SECRET_KEY_VAR));
    }
    if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
        return Err(ConfigError::BadBaseUrl(config.base_url.clone()));
    }
    Ok(())
}
