//
//  gogs-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the client for the Gogs REST API (v1).
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`transport`]: The `Transport` capability and its `reqwest` implementation
//! - [`client`]: [`GogsClient`] and its requester (URL, method, auth, body)
//! - [`response`]: Response classifiers mapping `{status, data}` to values
//! - [`endpoint`]: The declarative route table
//! - [`users`], [`repos`], [`tokens`], [`keys`]: Typed endpoint methods and models
//! - [`common`]: Shared types ([`ApiError`], [`RawResponse`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gogs_client::api::GogsClient;
//! use gogs_client::auth::Credentials;
//!
//! # async fn example() -> Result<(), gogs_client::api::ApiError> {
//! let client = GogsClient::new("https://try.gogs.io/api/v1")?;
//!
//! // Anonymous lookup: email comes back empty
//! let user = client.get_user("unknwon", None).await?;
//!
//! // Authenticated search
//! let admin = Credentials::token("0123456789abcdef");
//! let found = client.search_users("unk", Some(5), Some(&admin)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every endpoint returns `Result<T, ApiError>`:
//!
//! - `Validation`: a required argument was blank; nothing was sent
//! - `Status`: the service answered with an unexpected status (or a search
//!   envelope without `ok`); the full response is attached
//! - `Transport`: no response was received
//! - `Json`: encoding or decoding failed

/// Core requester and the [`GogsClient`] API instance.
pub mod client;

/// Shared error and response types.
pub mod common;

/// Declarative endpoint descriptors.
pub mod endpoint;

/// Public SSH keys.
pub mod keys;

/// Repositories.
pub mod repos;

/// Response classification rules.
pub mod response;

/// Access tokens.
pub mod tokens;

/// Pluggable HTTP transport.
pub mod transport;

/// User administration, lookup and search.
pub mod users;

pub use client::GogsClient;
pub use common::{ApiError, RawResponse};
pub use endpoint::DEFAULT_SEARCH_LIMIT;
pub use keys::{CreateKeyOption, PublicKey};
pub use repos::{CreateRepoOption, Permission, Repository};
pub use tokens::{AccessToken, CreateAccessTokenOption};
pub use transport::{HttpRequest, ReqwestTransport, Transport};
pub use users::{CreateUserOption, EditUserOption, User};
