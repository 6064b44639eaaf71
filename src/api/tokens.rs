//
//  gogs-client
//  api/tokens.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Access token API types and operations.
//!
//! Tokens live under `users/{username}/tokens`, where `username` is the acting
//! user taken from the credentials. The service only accepts Basic
//! authentication on these routes.
//!
//! A created token can be used directly as a credential:
//!
//! ```rust,no_run
//! use gogs_client::api::GogsClient;
//! use gogs_client::api::tokens::CreateAccessTokenOption;
//! use gogs_client::auth::Credentials;
//!
//! # async fn example() -> Result<(), gogs_client::api::ApiError> {
//! let client = GogsClient::new("https://try.gogs.io/api/v1")?;
//! let me = Credentials::basic("demo", "pw");
//!
//! let token = client.create_token(&CreateAccessTokenOption::new("ci"), &me).await?;
//! let by_token = Credentials::token(token).with_username("demo");
//! let user = client.get_user("demo", Some(&by_token)).await?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use super::client::GogsClient;
use super::common::ApiError;
use super::endpoint::{acting_username, required, routes};
use crate::auth::Credentials;

/// A personal access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Token label.
    pub name: String,

    /// Token value.
    #[serde(default)]
    pub sha1: String,
}

/// Body of `POST users/{username}/tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccessTokenOption {
    pub name: String,
}

impl CreateAccessTokenOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GogsClient {
    /// Creates an access token for the authenticated user.
    ///
    /// `POST users/{username}/tokens`, expects `201 Created`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the token name is blank or the
    /// credentials carry no username.
    pub async fn create_token(
        &self,
        token: &CreateAccessTokenOption,
        auth: &Credentials,
    ) -> Result<AccessToken, ApiError> {
        required(&token.name, "token name")?;
        let username = acting_username(auth)?;
        let body = serde_json::to_value(token)?;
        self.call(
            &routes::CREATE_TOKEN,
            &[("username", username)],
            Some(body),
            Some(auth),
        )
        .await
    }

    /// Lists the authenticated user's access tokens.
    ///
    /// `GET users/{username}/tokens`, expects `200 OK`.
    pub async fn list_tokens(&self, auth: &Credentials) -> Result<Vec<AccessToken>, ApiError> {
        let username = acting_username(auth)?;
        self.call(
            &routes::LIST_TOKENS,
            &[("username", username)],
            None,
            Some(auth),
        )
        .await
    }
}
