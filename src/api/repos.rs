//
//  gogs-client
//  api/repos.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Repository API types and operations.
//!
//! # Overview
//!
//! Repositories belong to a user and are addressed by their `full_name`, which
//! follows the format `{owner}/{name}`. Creation and listing act on the
//! authenticated user (`user/repos`); search is public.
//!
//! # Example
//!
//! ```rust,no_run
//! use gogs_client::api::GogsClient;
//! use gogs_client::api::repos::CreateRepoOption;
//! use gogs_client::auth::Credentials;
//!
//! # async fn example() -> Result<(), gogs_client::api::ApiError> {
//! let client = GogsClient::new("https://try.gogs.io/api/v1")?;
//! let me = Credentials::basic("demo", "pw");
//!
//! let repo = client
//!     .create_repo(&CreateRepoOption::new("hello").description("Hello world"), &me)
//!     .await?;
//! assert_eq!(repo.full_name, "demo/hello");
//!
//! // Creation must complete before the repository shows up in listings
//! let repos = client.list_repos(&me).await?;
//! assert!(repos.iter().any(|r| r.name == "hello"));
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::GogsClient;
use super::common::ApiError;
use super::endpoint::{required, routes, search_limit};
use super::users::User;
use crate::auth::Credentials;

/// A Gogs repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository ID.
    #[serde(default)]
    pub id: i64,

    /// The owning user or organization.
    #[serde(default)]
    pub owner: Option<User>,

    /// Repository name.
    pub name: String,

    /// Full path in format `{owner}/{name}`.
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub fork: bool,

    #[serde(default)]
    pub mirror: bool,

    #[serde(default)]
    pub empty: bool,

    /// Web URL of the repository.
    #[serde(default)]
    pub html_url: String,

    #[serde(default)]
    pub clone_url: String,

    #[serde(default)]
    pub ssh_url: String,

    #[serde(default)]
    pub website: String,

    #[serde(default)]
    pub stars_count: i64,

    #[serde(default)]
    pub forks_count: i64,

    #[serde(default)]
    pub watchers_count: i64,

    #[serde(default)]
    pub open_issues_count: i64,

    #[serde(default)]
    pub default_branch: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The caller's permissions; present only on authenticated requests.
    #[serde(default)]
    pub permissions: Option<Permission>,
}

/// A user's access level on a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub pull: bool,
}

/// Body of `POST user/repos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRepoOption {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub private: bool,
}

impl CreateRepoOption {
    /// A public repository with no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }
}

impl GogsClient {
    /// Searches public repositories.
    ///
    /// `GET repos/search?q={query}&uid={uid}&limit={limit}`, expects a
    /// `200 OK` envelope.
    ///
    /// # Parameters
    ///
    /// * `query` - Search keyword, trimmed first; an empty or whitespace-only
    ///   query returns an empty list without a request
    /// * `uid` - Restrict to this owner ID; `None` and `Some(0)` search all users
    /// * `limit` - Maximum results; `None` and `Some(0)` use the default
    pub async fn search_repos(
        &self,
        query: &str,
        uid: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<Repository>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("Blank repository search, skipping request");
            return Ok(Vec::new());
        }

        let uid = uid.unwrap_or(0).to_string();
        let limit = search_limit(limit).to_string();
        self.call(
            &routes::SEARCH_REPOS,
            &[("q", query), ("uid", uid.as_str()), ("limit", limit.as_str())],
            None,
            None,
        )
        .await
    }

    /// Creates a repository owned by the authenticated user.
    ///
    /// `POST user/repos`, expects `201 Created`.
    pub async fn create_repo(
        &self,
        repo: &CreateRepoOption,
        auth: &Credentials,
    ) -> Result<Repository, ApiError> {
        required(&repo.name, "repository name")?;
        let body = serde_json::to_value(repo)?;
        self.call(&routes::CREATE_REPO, &[], Some(body), Some(auth))
            .await
    }

    /// Retrieves a repository by its `{owner}/{name}` full name.
    ///
    /// `GET repos/{full_name}`, expects `200 OK`.
    pub async fn get_repo(
        &self,
        full_name: &str,
        auth: Option<&Credentials>,
    ) -> Result<Repository, ApiError> {
        let full_name = required(full_name.trim_matches('/'), "repository full name")?;
        self.call(&routes::GET_REPO, &[("full_name", full_name)], None, auth)
            .await
    }

    /// Lists the authenticated user's repositories.
    ///
    /// `GET user/repos`, expects `200 OK`.
    pub async fn list_repos(&self, auth: &Credentials) -> Result<Vec<Repository>, ApiError> {
        self.call(&routes::LIST_REPOS, &[], None, Some(auth)).await
    }

    /// Deletes a repository.
    ///
    /// `DELETE repos/{owner}/{repo}`, expects `204 No Content` and returns `true`.
    pub async fn delete_repo(
        &self,
        owner: &str,
        repo: &str,
        auth: &Credentials,
    ) -> Result<bool, ApiError> {
        let owner = required(owner, "repository owner")?;
        let repo = required(repo, "repository name")?;
        self.call(
            &routes::DELETE_REPO,
            &[("owner", owner), ("repo", repo)],
            None,
            Some(auth),
        )
        .await
    }
}
