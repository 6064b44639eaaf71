//
//  gogs-client
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User commands
//!
//! Creating, editing and deleting users requires administrator credentials.
//!
//! ## Examples
//!
//! ```bash
//! # Look up a user (email is only shown when authenticated)
//! gogs user view unknwon
//!
//! # Search users
//! gogs user search unk --limit 5
//!
//! # Create a user as an administrator
//! gogs --token $ADMIN_TOKEN user create demo --email demo@example.com
//!
//! # Delete a user
//! gogs --token $ADMIN_TOKEN user delete demo --yes
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::{CreateUserOption, EditUserOption, User};
use crate::output::{print_field, print_header, truncate, TableOutput, TableRow};

use super::GlobalOptions;

/// Manage users
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Show a user
    #[command(visible_alias = "get")]
    View(ViewArgs),

    /// Search users by name
    Search(SearchArgs),

    /// Create a user (admin)
    Create(CreateArgs),

    /// Edit a user (admin)
    Edit(EditArgs),

    /// Delete a user (admin)
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Username
    pub username: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search keyword
    pub query: String,

    /// Maximum number of results (server default 10)
    #[arg(long, short = 'L')]
    pub limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Username of the new account
    pub username: String,

    /// Email address
    #[arg(long, short = 'e')]
    pub email: String,

    /// Initial password; prompted for when omitted
    #[arg(long = "new-password")]
    pub new_password: Option<String>,

    /// Send a notification email to the new user
    #[arg(long)]
    pub notify: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Username of the account to edit
    pub username: String,

    /// New email address; defaults to the current one
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// New display name
    #[arg(long)]
    pub full_name: Option<String>,

    /// New password
    #[arg(long = "new-password")]
    pub new_password: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Activate or deactivate the account
    #[arg(long)]
    pub active: Option<bool>,

    /// Grant or revoke administrator rights
    #[arg(long)]
    pub admin: Option<bool>,

    /// Maximum number of repositories the user may create (-1 for default)
    #[arg(long, allow_hyphen_values = true)]
    pub max_repo_creation: Option<i64>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Username of the account to delete
    pub username: String,

    /// Skip confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableOutput for User {
    fn print_table(&self, color: bool) {
        print_header(&self.username);
        print_field("ID", &self.id.to_string(), color);
        print_field("Full name", &self.full_name, color);
        print_field("Email", &self.email, color);
        print_field("Avatar", &self.avatar_url, color);
    }
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "USERNAME", "FULL NAME", "EMAIL"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            truncate(&self.full_name, 30),
            self.email.clone(),
        ]
    }
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UserSubcommand::View(args) => self.view(args, global).await,
            UserSubcommand::Search(args) => self.search(args, global).await,
            UserSubcommand::Create(args) => self.create(args, global).await,
            UserSubcommand::Edit(args) => self.edit(args, global).await,
            UserSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let user = session
            .client
            .get_user(&args.username, session.credentials.as_ref())
            .await?;
        global.writer().write(&user)
    }

    async fn search(&self, args: &SearchArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let users = session
            .client
            .search_users(&args.query, args.limit, session.credentials.as_ref())
            .await?;
        global.writer().write_list(&users, "No users found.")
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;

        let password = match &args.new_password {
            Some(password) => password.clone(),
            None => dialoguer::Password::new()
                .with_prompt(format!("Password for {}", args.username))
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()?,
        };

        let option = CreateUserOption::new(&args.username, &args.email, password)
            .notify(args.notify);
        let user = session.client.create_user(&option, &auth).await?;

        let writer = global.writer();
        writer.write_done(
            &format!("Created user {}", user.username),
            json!({ "user": user }),
        )
    }

    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;

        // The service requires an email on every edit; keep the current one.
        let mut option = match &args.email {
            Some(email) => EditUserOption {
                email: email.clone(),
                ..Default::default()
            },
            None => {
                let current = session.client.get_user(&args.username, Some(&auth)).await?;
                EditUserOption::from(&current)
            }
        };
        if args.full_name.is_some() {
            option.full_name = args.full_name.clone();
        }
        option.password = args.new_password.clone();
        option.website = args.website.clone();
        option.location = args.location.clone();
        option.active = args.active;
        option.admin = args.admin;
        option.max_repo_creation = args.max_repo_creation;

        let user = session
            .client
            .edit_user(&args.username, &option, &auth)
            .await?;
        global.writer().write(&user)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;

        if !session.confirm(&format!("Delete user {}?", args.username), args.yes)? {
            global.writer().write_warning("Cancelled.");
            return Ok(());
        }

        session.client.delete_user(&args.username, &auth).await?;
        global.writer().write_done(
            &format!("Deleted user {}", args.username),
            json!({ "deleted": args.username }),
        )
    }
}
