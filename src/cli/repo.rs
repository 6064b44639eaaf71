//
//  gogs-client
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Repository commands
//!
//! ## Examples
//!
//! ```bash
//! # Search public repositories
//! gogs repo search hello --limit 5
//!
//! # Restrict the search to one owner's repositories
//! gogs repo search hello --uid 42
//!
//! # List your repositories
//! gogs repo list
//!
//! # Create a private repository
//! gogs repo create hello --description "Hello world" --private
//!
//! # View and delete
//! gogs repo view demo/hello
//! gogs repo delete demo/hello --yes
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::{CreateRepoOption, Repository};
use crate::output::{
    format_bool, format_date, format_visibility, print_field, print_header, truncate,
    TableOutput, TableRow,
};

use super::{CliError, GlobalOptions};

/// Manage repositories
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// Search public repositories
    Search(SearchArgs),

    /// List repositories of the authenticated user
    #[command(visible_alias = "ls")]
    List,

    /// Show a repository
    #[command(visible_alias = "get")]
    View(ViewArgs),

    /// Create a repository for the authenticated user
    Create(CreateArgs),

    /// Delete a repository
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search keyword
    pub query: String,

    /// Only search repositories owned by this user ID
    #[arg(long)]
    pub uid: Option<i64>,

    /// Maximum number of results (server default 10)
    #[arg(long, short = 'L')]
    pub limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Repository in OWNER/REPO format
    pub repo: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Repository name
    pub name: String,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Make the repository private
    #[arg(long)]
    pub private: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Repository in OWNER/REPO format, or REPO for your own
    pub repo: String,

    /// Skip confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableOutput for Repository {
    fn print_table(&self, color: bool) {
        print_header(&self.full_name);
        if !self.description.is_empty() {
            println!("{}", self.description);
            println!();
        }
        print_field("Visibility", &format_visibility(self.private, color), color);
        print_field("Default branch", &self.default_branch, color);
        print_field("Fork", &format_bool(self.fork, color), color);
        print_field("Mirror", &format_bool(self.mirror, color), color);
        print_field("Stars", &self.stars_count.to_string(), color);
        print_field("Forks", &self.forks_count.to_string(), color);
        print_field("Open issues", &self.open_issues_count.to_string(), color);
        print_field("Web", &self.html_url, color);
        print_field("Clone (HTTPS)", &self.clone_url, color);
        print_field("Clone (SSH)", &self.ssh_url, color);
        print_field("Created", &format_date(self.created_at.as_ref()), color);
        print_field("Updated", &format_date(self.updated_at.as_ref()), color);
    }
}

impl TableRow for Repository {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "VISIBILITY", "DESCRIPTION"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let name = if self.full_name.is_empty() {
            self.name.clone()
        } else {
            self.full_name.clone()
        };
        vec![
            self.id.to_string(),
            name,
            format_visibility(self.private, color),
            truncate(&self.description, 40),
        ]
    }
}

/// Splits `owner/repo`; a bare name is owned by `default_owner`.
fn split_repo(repo: &str, default_owner: Option<&str>) -> Result<(String, String)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        Some(_) => Err(CliError::Usage(format!("Invalid repository '{}', expected OWNER/REPO", repo)).into()),
        None => default_owner
            .map(|owner| (owner.to_string(), repo.to_string()))
            .ok_or_else(|| {
                CliError::Usage(format!(
                    "Cannot tell the owner of '{}'; use OWNER/REPO or pass --username",
                    repo
                ))
                .into()
            }),
    }
}

impl RepoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoSubcommand::Search(args) => self.search(args, global).await,
            RepoSubcommand::List => self.list(global).await,
            RepoSubcommand::View(args) => self.view(args, global).await,
            RepoSubcommand::Create(args) => self.create(args, global).await,
            RepoSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn search(&self, args: &SearchArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let repos = session
            .client
            .search_repos(&args.query, args.uid, args.limit)
            .await?;
        global.writer().write_list(&repos, "No repositories found.")
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;
        let repos = session.client.list_repos(&auth).await?;
        global.writer().write_list(&repos, "No repositories found.")
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let session = global.session()?;
        let repo = session
            .client
            .get_repo(&args.repo, session.credentials.as_ref())
            .await?;
        global.writer().write(&repo)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;

        let mut option = CreateRepoOption::new(&args.name).private(args.private);
        if let Some(description) = &args.description {
            option = option.description(description);
        }

        let repo = session.client.create_repo(&option, &auth).await?;
        global.writer().write_done(
            &format!("Created repository {}", repo.full_name),
            json!({ "repository": repo }),
        )
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let mut session = global.session()?;
        let auth = session.require_credentials()?;
        let (owner, name) = split_repo(&args.repo, auth.username())?;

        if !session.confirm(&format!("Delete repository {}/{}?", owner, name), args.yes)? {
            global.writer().write_warning("Cancelled.");
            return Ok(());
        }

        session.client.delete_repo(&owner, &name, &auth).await?;
        global.writer().write_done(
            &format!("Deleted repository {}/{}", owner, name),
            json!({ "deleted": format!("{}/{}", owner, name) }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_repo() {
        assert_eq!(
            split_repo("demo/hello", None).unwrap(),
            ("demo".to_string(), "hello".to_string())
        );
        assert_eq!(
            split_repo("hello", Some("me")).unwrap(),
            ("me".to_string(), "hello".to_string())
        );
        assert!(split_repo("hello", None).is_err());
        assert!(split_repo("/hello", Some("me")).is_err());
    }
}
