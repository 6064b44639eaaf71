//
//  gogs-client
//  api/keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Public SSH key API types and operations.
//!
//! Keys of the authenticated user are managed under `user/keys`; any user's
//! keys can be listed under `users/{username}/keys`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::GogsClient;
use super::common::ApiError;
use super::endpoint::{required, routes};
use crate::auth::Credentials;

/// A public SSH key registered to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicKey {
    /// Numeric key ID.
    pub id: i64,

    /// Key content, e.g. `ssh-ed25519 AAAA...`.
    #[serde(default)]
    pub key: String,

    /// API URL of the key.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST user/keys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateKeyOption {
    pub title: String,
    pub key: String,
}

impl CreateKeyOption {
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
        }
    }
}

impl GogsClient {
    /// Adds a public key to the authenticated user.
    ///
    /// `POST user/keys`, expects `201 Created`.
    pub async fn create_public_key(
        &self,
        key: &CreateKeyOption,
        auth: &Credentials,
    ) -> Result<PublicKey, ApiError> {
        required(&key.title, "key title")?;
        required(&key.key, "key content")?;
        let body = serde_json::to_value(key)?;
        self.call(&routes::CREATE_PUBLIC_KEY, &[], Some(body), Some(auth))
            .await
    }

    /// Lists a user's public keys.
    ///
    /// `GET users/{username}/keys`, expects `200 OK`.
    pub async fn list_public_keys(
        &self,
        username: &str,
        auth: Option<&Credentials>,
    ) -> Result<Vec<PublicKey>, ApiError> {
        let username = required(username, "username")?;
        self.call(
            &routes::LIST_PUBLIC_KEYS,
            &[("username", username)],
            None,
            auth,
        )
        .await
    }

    /// Retrieves one of the authenticated user's public keys.
    ///
    /// `GET user/keys/{id}`, expects `200 OK`.
    pub async fn get_public_key(&self, id: i64, auth: &Credentials) -> Result<PublicKey, ApiError> {
        let id = id.to_string();
        self.call(&routes::GET_PUBLIC_KEY, &[("id", id.as_str())], None, Some(auth))
            .await
    }

    /// Deletes one of the authenticated user's public keys.
    ///
    /// `DELETE user/keys/{id}`, expects `204 No Content` and returns `true`.
    pub async fn delete_public_key(&self, id: i64, auth: &Credentials) -> Result<bool, ApiError> {
        let id = id.to_string();
        self.call(
            &routes::DELETE_PUBLIC_KEY,
            &[("id", id.as_str())],
            None,
            Some(auth),
        )
        .await
    }
}
