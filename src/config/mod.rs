//
//  gogs-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides configuration management for the `gogs` command-line
//! tool. The library itself is configured only through
//! [`GogsClient::new`](crate::api::GogsClient::new); nothing here is read by
//! the API layer.
//!
//! ## Overview
//!
//! The configuration is organized into two parts:
//!
//! - **Core Configuration**: General CLI settings (default host, prompts)
//! - **Host Profiles**: Named Gogs servers with their API URL and credentials
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/gogs/config.toml`
//! - **macOS**: `~/Library/Application Support/gogs/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\gogs\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! default_host = "try"
//! prompt = "enabled"
//!
//! [hosts.try]
//! api_url = "https://try.gogs.io/api/v1"
//! username = "demo"
//! token = "0123456789abcdef"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gogs_client::config::{Config, HostConfig};
//!
//! let mut config = Config::load()?;
//! config.set_host("work", HostConfig::new("https://git.example.com/api/v1"));
//! config.set("default_host", "work".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`hosts`]: API URL defaults and normalization

mod file;
mod hosts;

pub use file::*;
pub use hosts::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::Credentials;

/// Global configuration container for the `gogs` CLI.
///
/// # Fields
///
/// * `core` - Core CLI configuration options
/// * `hosts` - Map of profile name to host configuration
///
/// # Examples
///
/// ```rust
/// use gogs_client::config::Config;
///
/// let config = Config::default();
/// assert!(config.hosts.is_empty());
/// assert_eq!(config.core.prompt, "enabled");
/// ```
///
/// # Notes
///
/// - All fields use `#[serde(default)]` so partial files load cleanly
/// - The configuration file is created on first save
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Core CLI configuration options.
    #[serde(default)]
    pub core: CoreConfig,

    /// Host profiles keyed by profile name.
    #[serde(default)]
    pub hosts: BTreeMap<String, HostConfig>,
}

/// Core configuration options.
///
/// | Field | Default |
/// |-------|---------|
/// | `default_host` | `None` (falls back to [`DEFAULT_API_URL`]) |
/// | `prompt` | `"enabled"` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Profile used when no `--host` is given.
    #[serde(default)]
    pub default_host: Option<String>,

    /// Interactive prompt behavior, `"enabled"` or `"disabled"`.
    ///
    /// Setting to `"disabled"` is useful for scripting; destructive commands
    /// then require `--yes`.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "enabled".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_host: None,
            prompt: default_prompt(),
        }
    }
}

/// A named Gogs server and the credentials used against it.
///
/// # Examples
///
/// ```rust
/// use gogs_client::config::HostConfig;
///
/// let host = HostConfig::new("https://git.example.com/api/v1/")
///     .with_username("demo")
///     .with_token("f00d");
/// assert_eq!(host.api_url, "https://git.example.com/api/v1");
/// assert!(host.credentials().is_some());
/// ```
///
/// # Notes
///
/// - Passwords are never written to the configuration file; supply them with
///   `--password` or `GOGS_PASSWORD`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HostConfig {
    /// API root URL, e.g. `https://try.gogs.io/api/v1`.
    #[serde(default)]
    pub api_url: String,

    /// Account name on this server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Access token for this server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl HostConfig {
    /// A profile without credentials; the URL is normalized.
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: normalize_api_url(api_url),
            username: None,
            token: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The stored credentials, if any are configured.
    pub fn credentials(&self) -> Option<Credentials> {
        if self.username.is_none() && self.token.is_none() {
            return None;
        }
        Some(Credentials {
            username: self.username.clone(),
            password: None,
            token: self.token.clone().map(Into::into),
        })
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the profile with the given name.
    pub fn host(&self, name: &str) -> Option<&HostConfig> {
        self.hosts.get(name)
    }

    /// Returns the profile named by `core.default_host`, if it exists.
    pub fn default_host(&self) -> Option<(&str, &HostConfig)> {
        let name = self.core.default_host.as_deref()?;
        self.hosts.get_key_value(name).map(|(k, v)| (k.as_str(), v))
    }

    /// Adds or replaces a profile.
    ///
    /// The first profile added becomes the default.
    pub fn set_host(&mut self, name: impl Into<String>, host: HostConfig) {
        let name = name.into();
        if self.core.default_host.is_none() {
            self.core.default_host = Some(name.clone());
        }
        self.hosts.insert(name, host);
    }

    /// Removes a profile, clearing the default if it pointed at it.
    pub fn remove_host(&mut self, name: &str) -> Option<HostConfig> {
        let removed = self.hosts.remove(name);
        if self.core.default_host.as_deref() == Some(name) {
            self.core.default_host = None;
        }
        removed
    }

    /// Gets a core configuration value by key.
    ///
    /// | Key | Field |
    /// |-----|-------|
    /// | `"default_host"` | `core.default_host` |
    /// | `"prompt"` | `core.prompt` |
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_host" => self.core.default_host.clone(),
            "prompt" => Some(self.core.prompt.clone()),
            _ => None,
        }
    }

    /// Sets a core configuration value by key. Returns `false` for unknown keys.
    ///
    /// Changes are only persisted when [`Config::save`] is called.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "default_host" => {
                self.core.default_host = Some(value);
                true
            }
            "prompt" => {
                self.core.prompt = value;
                true
            }
            _ => false,
        }
    }

    /// Whether interactive prompts are allowed.
    pub fn prompts_enabled(&self) -> bool {
        self.core.prompt != "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            [core]
            default_host = "try"

            [hosts.try]
            api_url = "https://try.gogs.io/api/v1"
            username = "demo"
            token = "abc"
            "#,
        )
        .unwrap();

        let (name, host) = config.default_host().unwrap();
        assert_eq!(name, "try");
        assert_eq!(host.username.as_deref(), Some("demo"));
        assert_eq!(config.core.prompt, "enabled");

        let creds = host.credentials().unwrap();
        assert_eq!(creds.authorization().as_deref(), Some("token abc"));
    }

    #[test]
    fn test_first_host_becomes_default() {
        let mut config = Config::default();
        config.set_host("a", HostConfig::new("https://a.example.com/api/v1"));
        config.set_host("b", HostConfig::new("https://b.example.com/api/v1"));
        assert_eq!(config.get("default_host"), Some("a".to_string()));

        config.remove_host("a");
        assert_eq!(config.get("default_host"), None);
        assert!(config.host("b").is_some());
    }

    #[test]
    fn test_get_set_keys() {
        let mut config = Config::default();
        assert!(config.prompts_enabled());
        assert!(config.set("prompt", "disabled".to_string()));
        assert!(!config.prompts_enabled());
        assert!(!config.set("unknown", "x".to_string()));
        assert_eq!(config.get("unknown"), None);
    }

    #[test]
    fn test_host_without_credentials() {
        assert!(HostConfig::new("https://g.io/api/v1").credentials().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_host(
            "try",
            HostConfig::new("https://try.gogs.io/api/v1").with_username("demo"),
        );
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
