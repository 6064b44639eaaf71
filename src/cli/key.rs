//
//  gogs-client
//  cli/key.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! SSH key management commands
//!
//! SSH keys are used for secure authentication when using Git over SSH.
//!
//! ## Examples
//!
//! ```bash
//! # List your SSH keys, or another user's
//! gogs key list
//! gogs key list --user unknwon
//!
//! # Add a new SSH key
//! gogs key add --title "Work Laptop" --key-file ~/.ssh/id_ed25519.pub
//!
//! # View and delete a key
//! gogs key view 9
//! gogs key delete 9
//! ```

use std::fs;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::{CreateKeyOption, PublicKey};
use crate::output::{format_date, print_field, print_header, truncate, TableOutput, TableRow};

use super::{CliError, GlobalOptions};

/// Manage SSH keys
#[derive(Args, Debug)]
pub struct KeyCommand {
    #[command(subcommand)]
    pub command: KeySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum KeySubcommand {
    /// List SSH keys
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Add an SSH key
    Add(AddArgs),

    /// Show an SSH key
    #[command(visible_alias = "get")]
    View(IdArgs),

    /// Delete an SSH key
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// List this user's keys instead of your own
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Key title/label
    #[arg(long, short = 't')]
    pub title: String,

    /// SSH public key content
    #[arg(long, short = 'k', conflicts_with = "key_file", required_unless_present = "key_file")]
    pub key: Option<String>,

    /// Read key from file
    #[arg(long, short = 'f', conflicts_with = "key")]
    pub key_file: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Key ID
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Key ID to delete
    pub id: i64,

    /// Skip confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableOutput for PublicKey {
    fn print_table(&self, color: bool) {
        print_header(&self.title);
        print_field("ID", &self.id.to_string(), color);
        print_field("Key", &self.key, color);
        print_field("Created", &format_date(self.created_at.as_ref()), color);
    }
}

impl TableRow for PublicKey {
    fn headers() -> &'static [&'static str] {
        &["ID", "TITLE", "KEY", "CREATED"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.to_string(),
            truncate(&self.title, 20),
            key_preview(&self.key),
            format_date(self.created_at.as_ref()),
        ]
    }
}

/// Key type plus the first characters of the key material.
fn key_preview(key: &str) -> String {
    let mut parts = key.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(kind), Some(material)) => format!("{} {}", kind, truncate(material, 23)),
        _ => truncate(key, 40),
    }
}

/// Accepts the key formats the server understands.
fn validate_key(key: &str) -> Result<()> {
    if key.starts_with("ssh-") || key.starts_with("ecdsa-") {
        Ok(())
    } else {
        Err(CliError::Usage(
            "Invalid SSH public key format. Key should start with 'ssh-' or 'ecdsa-'".to_string(),
        )
        .into())
    }
}

impl KeyCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            KeySubcommand::List(args) => self.list(args, global).await,
            KeySubcommand::Add(args) => self.add(args, global).await,
            KeySubcommand::View(args) => self.view(args, global).await,
            KeySubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let username = args
            .user
            .clone()
            .or_else(|| session.credentials.as_ref().and_then(|c| c.username.clone()))
            .ok_or_else(|| CliError::Usage("Pass --user or --username to choose whose keys to list".to_string()))?;

        let keys = session
            .client
            .list_public_keys(&username, session.credentials.as_ref())
            .await?;
        global.writer().write_list(&keys, "No SSH keys found.")
    }

    async fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;

        let key_content = match (&args.key, &args.key_file) {
            (Some(key), _) => key.trim().to_string(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path))?
                .trim()
                .to_string(),
            (None, None) => {
                return Err(CliError::Usage("Either --key or --key-file is required".to_string()).into())
            }
        };
        validate_key(&key_content)?;

        let key = session
            .client
            .create_public_key(&CreateKeyOption::new(&args.title, key_content), &auth)
            .await?;
        global.writer().write_done(
            &format!("Added SSH key {} (ID {})", key.title, key.id),
            json!({ "key": key }),
        )
    }

    async fn view(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;
        let key = session.client.get_public_key(args.id, &auth).await?;
        global.writer().write(&key)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;

        if !session.confirm(&format!("Delete SSH key {}?", args.id), args.yes)? {
            global.writer().write_warning("Cancelled.");
            return Ok(());
        }

        session.client.delete_public_key(args.id, &auth).await?;
        global.writer().write_done(
            &format!("Deleted SSH key {}", args.id),
            json!({ "deleted": args.id }),
        )
    }
}
