//
//  gogs-client
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User API types and operations.
//!
//! Covers the administrative user endpoints (`admin/users`) and the public
//! user lookup and search endpoints (`users/...`).
//!
//! # Example
//!
//! ```rust,no_run
//! use gogs_client::api::GogsClient;
//! use gogs_client::api::users::CreateUserOption;
//! use gogs_client::auth::Credentials;
//!
//! # async fn example() -> Result<(), gogs_client::api::ApiError> {
//! let client = GogsClient::new("https://try.gogs.io/api/v1")?;
//! let admin = Credentials::basic("admin", "secret");
//!
//! let user = client
//!     .create_user(&CreateUserOption::new("demo", "d@x.com", "pw"), &admin)
//!     .await?;
//! assert_eq!(user.username, "demo");
//!
//! client.delete_user("demo", &admin).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Anonymous lookups return users with an empty `email`
//! - Administrators cannot delete their own account through this client

use serde::{Deserialize, Serialize};

use super::client::GogsClient;
use super::common::ApiError;
use super::endpoint::{required, routes, search_limit};
use crate::auth::Credentials;

/// A Gogs user account.
///
/// Older servers name the account field `login`; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user ID.
    #[serde(default)]
    pub id: i64,

    /// Account name, unique on the server.
    #[serde(alias = "login")]
    pub username: String,

    /// Display name.
    #[serde(default)]
    pub full_name: String,

    /// Email address; empty when the request was not authenticated.
    #[serde(default)]
    pub email: String,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
}

/// Body of `POST admin/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserOption {
    pub username: String,
    pub email: String,
    pub password: String,

    /// Whether the server emails the new user a notification.
    #[serde(default)]
    pub send_notify: bool,
}

impl CreateUserOption {
    /// A new user without notification.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            send_notify: false,
        }
    }

    pub fn notify(mut self, send_notify: bool) -> Self {
        self.send_notify = send_notify;
        self
    }
}

/// Body of `PATCH admin/users/{username}`.
///
/// The username itself is taken from the path and cannot be changed. Fields
/// left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditUserOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Email address. The service requires it on every edit.
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_git_hook: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_import_local: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_repo_creation: Option<i64>,
}

impl From<&User> for EditUserOption {
    /// Starts an edit from an existing user, carrying over its profile fields.
    fn from(user: &User) -> Self {
        Self {
            full_name: Some(user.full_name.clone()),
            email: user.email.clone(),
            ..Default::default()
        }
    }
}

impl GogsClient {
    /// Creates a user. Requires administrator credentials.
    ///
    /// `POST admin/users`, expects `201 Created`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] if the username is blank
    /// - [`ApiError::Status`] for any status other than 201
    pub async fn create_user(
        &self,
        user: &CreateUserOption,
        auth: &Credentials,
    ) -> Result<User, ApiError> {
        required(&user.username, "username")?;
        let body = serde_json::to_value(user)?;
        self.call(&routes::CREATE_USER, &[], Some(body), Some(auth))
            .await
    }

    /// Edits a user. Requires administrator credentials.
    ///
    /// `PATCH admin/users/{username}`, expects `200 OK`.
    pub async fn edit_user(
        &self,
        username: &str,
        edit: &EditUserOption,
        auth: &Credentials,
    ) -> Result<User, ApiError> {
        let username = required(username, "username")?;
        let body = serde_json::to_value(edit)?;
        self.call(
            &routes::EDIT_USER,
            &[("username", username)],
            Some(body),
            Some(auth),
        )
        .await
    }

    /// Deletes a user. Requires administrator credentials.
    ///
    /// `DELETE admin/users/{username}`, expects `204 No Content` and returns
    /// `true`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without contacting the server when the
    /// username is blank or names the authenticating user.
    pub async fn delete_user(&self, username: &str, auth: &Credentials) -> Result<bool, ApiError> {
        let username = required(username, "username")?;
        if auth.username() == Some(username) {
            tracing::debug!("Refusing self-delete of {}", username);
            return Err(ApiError::validation("users cannot delete themselves"));
        }

        self.call(
            &routes::DELETE_USER,
            &[("username", username)],
            None,
            Some(auth),
        )
        .await
    }

    /// Searches users by name.
    ///
    /// `GET users/search?q={query}&limit={limit}`, expects a `200 OK` envelope.
    ///
    /// The query is trimmed first; an empty or whitespace-only query returns
    /// an empty list without a request. A missing or
    /// zero `limit` uses [`DEFAULT_SEARCH_LIMIT`](super::endpoint::DEFAULT_SEARCH_LIMIT).
    /// Without credentials the returned emails are empty.
    pub async fn search_users(
        &self,
        query: &str,
        limit: Option<u32>,
        auth: Option<&Credentials>,
    ) -> Result<Vec<User>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("Blank user search, skipping request");
            return Ok(Vec::new());
        }

        let limit = search_limit(limit).to_string();
        self.call(
            &routes::SEARCH_USERS,
            &[("q", query), ("limit", limit.as_str())],
            None,
            auth,
        )
        .await
    }

    /// Retrieves a user by name.
    ///
    /// `GET users/{username}`, expects `200 OK`. Without credentials the
    /// returned `email` is empty.
    pub async fn get_user(
        &self,
        username: &str,
        auth: Option<&Credentials>,
    ) -> Result<User, ApiError> {
        let username = required(username, "username")?;
        self.call(&routes::GET_USER, &[("username", username)], None, auth)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_login_alias() {
        let user: User =
            serde_json::from_str(r#"{"id": 3, "login": "demo", "email": ""}"#).unwrap();
        assert_eq!(user.username, "demo");
        assert_eq!(user.id, 3);
        assert!(user.email.is_empty());
    }

    #[test]
    fn test_create_user_body() {
        let body = serde_json::to_value(CreateUserOption::new("demo", "d@x.com", "pw")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "username": "demo",
                "email": "d@x.com",
                "password": "pw",
                "send_notify": false
            })
        );
    }

    #[test]
    fn test_edit_user_skips_unset_fields() {
        let edit = EditUserOption {
            email: "d@x.com".to_string(),
            admin: Some(true),
            ..Default::default()
        };
        let body = serde_json::to_value(edit).unwrap();
        assert_eq!(body, serde_json::json!({"email": "d@x.com", "admin": true}));
    }
}
