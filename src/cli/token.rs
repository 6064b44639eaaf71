//
//  gogs-client
//  cli/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Access token commands
//!
//! Tokens belong to the user named by `--username`; the server only accepts
//! Basic authentication for these endpoints.
//!
//! ## Examples
//!
//! ```bash
//! gogs --username demo token create ci
//! gogs --username demo --password secret token list
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::{AccessToken, CreateAccessTokenOption};
use crate::output::{print_field, print_header, TableOutput, TableRow};

use super::GlobalOptions;

/// Manage access tokens
#[derive(Args, Debug)]
pub struct TokenCommand {
    #[command(subcommand)]
    pub command: TokenSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TokenSubcommand {
    /// Create an access token
    Create(CreateArgs),

    /// List access tokens
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Token name
    pub name: String,
}

impl TableOutput for AccessToken {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        print_field("Token", &self.sha1, color);
    }
}

impl TableRow for AccessToken {
    fn headers() -> &'static [&'static str] {
        &["NAME", "TOKEN"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![self.name.clone(), self.sha1.clone()]
    }
}

impl TokenCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TokenSubcommand::Create(args) => self.create(args, global).await,
            TokenSubcommand::List => self.list(global).await,
        }
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;
        let token = session
            .client
            .create_token(&CreateAccessTokenOption::new(&args.name), &auth)
            .await?;

        let writer = global.writer();
        if writer.format() == crate::output::OutputFormat::Json {
            return writer.write_done("", json!({ "token": token }));
        }
        writer.write_success(&format!("Created token {}", token.name));
        println!("{}", token.sha1);
        println!();
        writer.write_warning("Store this token now; it is shown only here and in 'gogs token list'.");
        Ok(())
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;
        let tokens = session.client.list_tokens(&auth).await?;
        global.writer().write_list(&tokens, "No access tokens found.")
    }
}
