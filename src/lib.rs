//
//  gogs-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Gogs Client Library
//!
//! An asynchronous client for the REST API (v1) of a
//! [Gogs](https://gogs.io) server, plus the `gogs` command-line tool built
//! on top of it.
//!
//! ## Overview
//!
//! Every API call goes through the same pipeline:
//!
//! 1. The endpoint method validates its arguments and renders its route
//! 2. The requester resolves the URL, picks the HTTP method, attaches the
//!    `Authorization` header and serializes the JSON body
//! 3. The transport performs one round trip and returns `{status, data}`
//! 4. The response classifier turns that into a typed value or an
//!    [`ApiError`]
//!
//! ## Module Structure
//!
//! - [`api`]: [`GogsClient`], the transport, the classifier and the endpoints
//! - [`auth`]: [`Credentials`] and the `Authorization` header encoder
//! - [`config`]: Host profiles for the CLI
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gogs_client::{Credentials, GogsClient};
//! use gogs_client::api::CreateRepoOption;
//!
//! # async fn example() -> Result<(), gogs_client::ApiError> {
//! let client = GogsClient::new("https://try.gogs.io/api/v1")?;
//! let auth = Credentials::basic("demo", "secret");
//!
//! let repo = client
//!     .create_repo(&CreateRepoOption::new("hello").private(true), &auth)
//!     .await?;
//! println!("created {}", repo.full_name);
//!
//! client.delete_repo("demo", "hello", &auth).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Endpoints
//!
//! | Area | Methods |
//! |------|---------|
//! | Users | `create_user`, `edit_user`, `delete_user`, `search_users`, `get_user` |
//! | Repositories | `search_repos`, `create_repo`, `get_repo`, `list_repos`, `delete_repo` |
//! | Tokens | `create_token`, `list_tokens` |
//! | SSH keys | `create_public_key`, `list_public_keys`, `get_public_key`, `delete_public_key` |

pub mod api;

pub mod auth;

pub mod cli;

pub mod config;

pub mod output;

pub use api::{ApiError, GogsClient, RawResponse};

pub use auth::{Credentials, Token};

pub use cli::Cli;

pub use config::Config;

/// Binary and configuration directory name.
pub const APP_NAME: &str = "gogs";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes of the `gogs` binary.
///
/// | Code | Meaning |
/// |------|---------|
/// | 0 | Success |
/// | 1 | Any other error (transport, unexpected status, I/O) |
/// | 2 | Usage or local validation error |
/// | 4 | Authentication missing or rejected (401/403) |
/// | 8 | Resource not found (404) |
pub mod exit_codes {
    use crate::api::ApiError;
    use crate::cli::CliError;

    pub const SUCCESS: i32 = 0;

    pub const ERROR: i32 = 1;

    pub const USAGE: i32 = 2;

    pub const AUTH_ERROR: i32 = 4;

    pub const NOT_FOUND: i32 = 8;

    /// Maps an error chain to an exit code.
    pub fn for_error(err: &anyhow::Error) -> i32 {
        if let Some(api) = err.downcast_ref::<ApiError>() {
            return match api {
                e if e.is_not_found() => NOT_FOUND,
                e if e.is_auth_error() => AUTH_ERROR,
                ApiError::Validation(_) => USAGE,
                _ => ERROR,
            };
        }

        match err.downcast_ref::<CliError>() {
            Some(CliError::NotAuthenticated) => AUTH_ERROR,
            Some(CliError::UnknownHost(_)) | Some(CliError::Usage(_)) => USAGE,
            None => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::api::RawResponse;

        #[test]
        fn test_api_errors() {
            let not_found = anyhow::Error::new(ApiError::Status(RawResponse::new(404, "")));
            assert_eq!(for_error(&not_found), NOT_FOUND);

            let forbidden = anyhow::Error::new(ApiError::Status(RawResponse::new(403, "")));
            assert_eq!(for_error(&forbidden), AUTH_ERROR);

            let conflict = anyhow::Error::new(ApiError::Status(RawResponse::new(422, "")));
            assert_eq!(for_error(&conflict), ERROR);

            let invalid = anyhow::Error::new(ApiError::Validation("username is required".into()));
            assert_eq!(for_error(&invalid), USAGE);
        }

        #[test]
        fn test_cli_errors() {
            assert_eq!(
                for_error(&anyhow::Error::new(CliError::NotAuthenticated)),
                AUTH_ERROR
            );
            assert_eq!(for_error(&anyhow::anyhow!("disk full")), ERROR);
        }

        #[test]
        fn test_context_is_transparent() {
            use anyhow::Context;
            let err: anyhow::Result<()> =
                Err(ApiError::Status(RawResponse::new(404, ""))).context("Failed to load repository");
            assert_eq!(for_error(&err.unwrap_err()), NOT_FOUND);
        }
    }
}
