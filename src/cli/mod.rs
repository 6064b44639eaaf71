//
//  gogs-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Command-Line Interface
//!
//! Argument definitions for the `gogs` binary, built with `clap` derive.
//!
//! ## Command Structure
//!
//! ```text
//! gogs [GLOBAL OPTIONS] <COMMAND> [SUBCOMMAND] [ARGS]
//! ```
//!
//! | Command | Description |
//! |---------|-------------|
//! | `user` | Create, edit, delete, search and view users |
//! | `repo` | Search, create, view, list and delete repositories |
//! | `token` | Create and list access tokens |
//! | `key` | Manage public SSH keys |
//! | `config` | Manage host profiles and settings |
//! | `completion` | Generate shell completions |
//! | `version` | Print the version |
//!
//! ## Global Options
//!
//! | Option | Environment | Description |
//! |--------|-------------|-------------|
//! | `--api-url` | `GOGS_API_URL` | API root, e.g. `https://try.gogs.io/api/v1` |
//! | `--host` | `GOGS_HOST` | Host profile from the config file |
//! | `--username` | `GOGS_USERNAME` | Account name |
//! | `--password` | `GOGS_PASSWORD` | Account password (Basic auth) |
//! | `--token` | `GOGS_TOKEN` | Access token (takes precedence) |
//! | `--json` | | Machine-readable output |
//!
//! Flags win over the selected host profile; without either, the public
//! instance at `https://try.gogs.io/api/v1` is used anonymously.

mod completion;
mod config;
mod key;
mod repo;
mod token;
mod user;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use key::KeyCommand;
pub use repo::RepoCommand;
pub use token::TokenCommand;
pub use user::UserCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::api::GogsClient;
use crate::auth::Credentials;
use crate::config::{Config, HostConfig, DEFAULT_API_URL};
use crate::output::{OutputFormat, OutputWriter};

/// Root parser for the `gogs` binary.
#[derive(Parser, Debug)]
#[command(
    name = "gogs",
    version,
    about = "Work with a Gogs server from the command line",
    long_about = "gogs is a CLI for the Gogs REST API (v1).\n\n\
                  It manages users, repositories, access tokens and SSH keys.",
    propagate_version = true,
    after_help = "Use 'gogs <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API root URL, e.g. https://try.gogs.io/api/v1
    #[arg(long, global = true, env = "GOGS_API_URL")]
    pub api_url: Option<String>,

    /// Host profile from the config file
    #[arg(long, global = true, env = "GOGS_HOST")]
    pub host: Option<String>,

    /// Account name
    #[arg(long, short = 'u', global = true, env = "GOGS_USERNAME")]
    pub username: Option<String>,

    /// Account password, for Basic authentication
    #[arg(long, global = true, env = "GOGS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Access token; takes precedence over the password
    #[arg(long, global = true, env = "GOGS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    #[command(visible_alias = "u")]
    User(UserCommand),

    /// Manage repositories
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Manage access tokens
    Token(TokenCommand),

    /// Manage public SSH keys
    Key(KeyCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Generate shell completions
    Completion(CompletionCommand),

    /// Print the version
    Version,
}

/// Failures raised by the CLI itself rather than the API.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Not authenticated. Pass --token, or --username and --password, or configure a host with 'gogs config set-host'.")]
    NotAuthenticated,

    #[error("Host profile '{0}' not found. Run 'gogs config list' to see configured hosts.")]
    UnknownHost(String),

    #[error("{0}")]
    Usage(String),
}

impl GlobalOptions {
    /// Selects the output writer from `--json`.
    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }

    /// Resolves the host profile: `--host`, then the configured default.
    pub fn profile<'a>(&self, config: &'a Config) -> Result<Option<&'a HostConfig>> {
        match &self.host {
            Some(name) => config
                .host(name)
                .map(Some)
                .ok_or_else(|| CliError::UnknownHost(name.clone()).into()),
            None => Ok(config.default_host().map(|(_, host)| host)),
        }
    }

    /// Resolves the API root URL: flag, then profile, then the public instance.
    pub fn api_url(&self, config: &Config) -> Result<String> {
        if let Some(url) = &self.api_url {
            return Ok(crate::config::normalize_api_url(url));
        }
        Ok(self
            .profile(config)?
            .map(|host| host.api_url.clone())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string()))
    }

    /// Merges flag credentials over the profile's stored credentials.
    ///
    /// A `--password` flag discards a stored token so that Basic
    /// authentication is actually used.
    pub fn credentials(&self, config: &Config) -> Result<Option<Credentials>> {
        let mut creds = self
            .profile(config)?
            .and_then(HostConfig::credentials)
            .unwrap_or_default();

        if let Some(username) = &self.username {
            creds.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            creds.password = Some(password.clone());
            creds.token = None;
        }
        if let Some(token) = &self.token {
            creds.token = Some(token.as_str().into());
        }

        if creds == Credentials::default() {
            Ok(None)
        } else {
            Ok(Some(creds))
        }
    }

    /// Builds the API client and optional credentials for a command.
    pub fn session(&self) -> Result<Session> {
        let config = Config::load().context("Failed to load configuration")?;
        let api_url = self.api_url(&config)?;
        let client = GogsClient::new(&api_url)
            .with_context(|| format!("Invalid API URL '{}'", api_url))?;
        let credentials = self.credentials(&config)?;
        tracing::debug!(api_url = %api_url, authenticated = credentials.is_some(), "session resolved");
        Ok(Session {
            client,
            credentials,
            prompts: config.prompts_enabled(),
        })
    }
}

/// A resolved client plus the credentials to call it with.
pub struct Session {
    pub client: GogsClient,
    pub credentials: Option<Credentials>,
    prompts: bool,
}

impl Session {
    /// Credentials for endpoints that require authentication.
    ///
    /// When only a username is known and prompts are enabled on a terminal,
    /// the password is asked for interactively.
    pub fn require_credentials(&mut self) -> Result<Credentials> {
        let needs_password = matches!(
            &self.credentials,
            Some(Credentials { username: Some(_), password: None, token: None })
        );
        if needs_password && self.interactive() {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .interact()?;
            if let Some(creds) = self.credentials.as_mut() {
                creds.password = Some(password);
            }
        }

        self.credentials
            .clone()
            .filter(|creds| creds.authorization().is_some())
            .ok_or_else(|| CliError::NotAuthenticated.into())
    }

    /// Asks for confirmation before a destructive action.
    ///
    /// `--yes` skips the prompt; without a terminal or with prompts disabled
    /// the action is refused.
    pub fn confirm(&self, message: &str, yes: bool) -> Result<bool> {
        if yes {
            return Ok(true);
        }
        if !self.interactive() {
            return Err(CliError::Usage(format!("{} Pass --yes to confirm.", message)).into());
        }
        Ok(dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?)
    }

    fn interactive(&self) -> bool {
        self.prompts && console::Term::stderr().is_term()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_profile() -> Config {
        let mut config = Config::default();
        config.set_host(
            "work",
            HostConfig::new("https://git.example.com/api/v1")
                .with_username("demo")
                .with_token("stored"),
        );
        config
    }

    #[test]
    fn test_defaults_without_profile() {
        let global = GlobalOptions::default();
        let config = Config::default();
        assert_eq!(global.api_url(&config).unwrap(), DEFAULT_API_URL);
        assert!(global.credentials(&config).unwrap().is_none());
    }

    #[test]
    fn test_profile_is_used() {
        let global = GlobalOptions::default();
        let config = config_with_profile();
        assert_eq!(
            global.api_url(&config).unwrap(),
            "https://git.example.com/api/v1"
        );
        let creds = global.credentials(&config).unwrap().unwrap();
        assert_eq!(creds.authorization().as_deref(), Some("token stored"));
    }

    #[test]
    fn test_flags_override_profile() {
        let global = GlobalOptions {
            api_url: Some("http://localhost:3000".into()),
            password: Some("pw".into()),
            ..Default::default()
        };
        let config = config_with_profile();
        assert_eq!(
            global.api_url(&config).unwrap(),
            "http://localhost:3000/api/v1"
        );
        let creds = global.credentials(&config).unwrap().unwrap();
        assert_eq!(creds, Credentials::basic("demo", "pw"));
    }

    #[test]
    fn test_unknown_host_profile() {
        let global = GlobalOptions {
            host: Some("missing".into()),
            ..Default::default()
        };
        let err = global.api_url(&Config::default()).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "gogs", "--json", "repo", "search", "hello", "--limit", "5",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert!(matches!(cli.command, Commands::Repo(_)));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
