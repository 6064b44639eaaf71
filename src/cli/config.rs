//
//  gogs-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Manages host profiles and the core settings stored in `config.toml`.
//!
//! ## Examples
//!
//! ```bash
//! gogs config set-host work --api-url git.example.com --username demo --token f00d
//! gogs config use work
//! gogs config set prompt disabled
//! gogs config list
//! gogs config remove-host work
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::json;

use crate::config::{profile_name, Config, HostConfig};
use crate::output::{TableBuilder, TableRow};

use super::GlobalOptions;

const VALID_CORE_KEYS: &[&str] = &["default_host", "prompt"];

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a core setting
    Get(GetArgs),

    /// Change a core setting
    Set(SetArgs),

    /// List host profiles and settings
    #[command(visible_alias = "ls")]
    List,

    /// Add or update a host profile
    SetHost(SetHostArgs),

    /// Remove a host profile
    RemoveHost(NameArgs),

    /// Make a host profile the default
    Use(NameArgs),

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Setting name (default_host, prompt)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Setting name (default_host, prompt)
    pub key: String,

    pub value: String,
}

#[derive(Args, Debug)]
pub struct SetHostArgs {
    /// Profile name; defaults to the host name of the API URL
    pub name: Option<String>,

    /// API root URL; a bare host gets /api/v1 appended
    #[arg(long = "url", short = 'a')]
    pub url: String,

    /// Account name to store
    #[arg(long = "user")]
    pub user: Option<String>,

    /// Access token to store
    #[arg(long = "access-token")]
    pub access_token: Option<String>,

    /// Also make this the default profile
    #[arg(long)]
    pub default: bool,
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Profile name
    pub name: String,
}

struct HostRow<'a> {
    name: &'a str,
    host: &'a HostConfig,
    is_default: bool,
}

impl TableRow for HostRow<'_> {
    fn headers() -> &'static [&'static str] {
        &["", "NAME", "API URL", "USERNAME", "TOKEN"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            if self.is_default { "*" } else { "" }.to_string(),
            self.name.to_string(),
            self.host.api_url.clone(),
            self.host.username.clone().unwrap_or_default(),
            if self.host.token.is_some() { "set" } else { "" }.to_string(),
        ]
    }
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::SetHost(args) => self.set_host(args, global),
            ConfigSubcommand::RemoveHost(args) => self.remove_host(args, global),
            ConfigSubcommand::Use(args) => self.use_host(args, global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let value = config.get(&args.key);

        if global.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "key": args.key, "value": value }))?
            );
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;

        if !VALID_CORE_KEYS.contains(&args.key.as_str()) {
            bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                args.key,
                VALID_CORE_KEYS.join(", ")
            );
        }
        if args.key == "prompt" && !["enabled", "disabled"].contains(&args.value.as_str()) {
            bail!("Invalid value for prompt. Valid values: enabled, disabled");
        }
        if args.key == "default_host" && config.host(&args.value).is_none() {
            bail!("Host profile '{}' not found", args.value);
        }

        config.set(&args.key, args.value.clone());
        config.save()?;

        global.writer().write_done(
            &format!("Set {} = {}", style(&args.key).cyan(), args.value),
            json!({ "key": args.key, "value": args.value }),
        )
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            // Tokens are masked; the file itself is the place to read them.
            let mut masked = config.clone();
            for host in masked.hosts.values_mut() {
                if host.token.is_some() {
                    host.token = Some("***".to_string());
                }
            }
            println!("{}", serde_json::to_string_pretty(&masked)?);
            return Ok(());
        }

        println!("prompt = {}", config.core.prompt);
        println!();

        if config.hosts.is_empty() {
            println!("No host profiles configured.");
            println!();
            println!("Add one with:");
            println!("  gogs config set-host --url https://try.gogs.io/api/v1 --user <name> --access-token <token>");
            return Ok(());
        }

        let default = config.core.default_host.as_deref();
        let rows = config.hosts.iter().map(|(name, host)| HostRow {
            name,
            host,
            is_default: Some(name.as_str()) == default,
        });

        TableBuilder::new()
            .headers(HostRow::headers().iter().copied())
            .rows(rows.map(|row| row.row(false)))
            .print();
        Ok(())
    }

    fn set_host(&self, args: &SetHostArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        let name = args.name.clone().unwrap_or_else(|| profile_name(&args.url));

        let mut host = HostConfig::new(&args.url);
        if let Some(user) = &args.user {
            host = host.with_username(user);
        }
        if let Some(token) = &args.access_token {
            host = host.with_token(token);
        }

        config.set_host(name.clone(), host.clone());
        if args.default {
            config.set("default_host", name.clone());
        }
        config.save()?;

        global.writer().write_done(
            &format!("Saved host {} ({})", style(&name).cyan(), host.api_url),
            json!({ "host": name, "api_url": host.api_url }),
        )
    }

    fn remove_host(&self, args: &NameArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if config.remove_host(&args.name).is_none() {
            bail!("Host profile '{}' not found", args.name);
        }
        config.save()?;

        global.writer().write_done(
            &format!("Removed host {}", style(&args.name).cyan()),
            json!({ "removed": args.name }),
        )
    }

    fn use_host(&self, args: &NameArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if config.host(&args.name).is_none() {
            bail!("Host profile '{}' not found", args.name);
        }
        config.set("default_host", args.name.clone());
        config.save()?;

        global.writer().write_done(
            &format!("Default host is now {}", style(&args.name).cyan()),
            json!({ "default_host": args.name }),
        )
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        if global.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "path": path.display().to_string() }))?
            );
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}
