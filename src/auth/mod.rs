//
//  gogs-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module models the credentials a caller passes with each API call and
//! turns them into an `Authorization` header value.
//!
//! ## Supported Authentication Methods
//!
//! - **Access Token**: `Authorization: token <sha1>`. The token may be given as a
//!   plain string or as the `{ "sha1": "..." }` object the service returns when a
//!   token is created. Both forms are equivalent.
//! - **Basic Authentication**: `Authorization: Basic base64(username:password)`.
//!
//! A token always wins. When a token is present the header is built from it,
//! even if username and password are also set, and even if the token value is
//! empty.
//!
//! ## Example
//!
//! ```rust
//! use gogs_client::auth::{authorization_header, Credentials};
//!
//! let basic = Credentials::basic("demo", "secret");
//! assert_eq!(
//!     authorization_header(Some(&basic)).as_deref(),
//!     Some("Basic ZGVtbzpzZWNyZXQ=")
//! );
//!
//! let token = Credentials::token("abc123").with_username("demo");
//! assert_eq!(token.authorization().as_deref(), Some("token abc123"));
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::api::tokens::AccessToken;

/// An access token, either bare or wrapped the way the service returns it.
///
/// Deserializes from either `"abc123"` or `{"sha1": "abc123"}`.
///
/// # Example
///
/// ```rust
/// use gogs_client::auth::Token;
///
/// let plain: Token = serde_json::from_str(r#""abc123""#).unwrap();
/// let wrapped: Token = serde_json::from_str(r#"{"sha1": "abc123"}"#).unwrap();
/// assert_eq!(plain.sha1(), wrapped.sha1());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// A bare token string.
    Plain(String),

    /// A structured token exposing its value as `sha1`.
    ///
    /// A missing `sha1` deserializes as empty; the request is still sent
    /// with a token header.
    Sha1 {
        /// The token value.
        #[serde(default)]
        sha1: String,
    },
}

impl Token {
    /// Returns the token value regardless of its representation.
    pub fn sha1(&self) -> &str {
        match self {
            Self::Plain(token) => token,
            Self::Sha1 { sha1 } => sha1,
        }
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self::Plain(token)
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self::Plain(token.to_string())
    }
}

impl From<AccessToken> for Token {
    fn from(token: AccessToken) -> Self {
        Self::Sha1 { sha1: token.sha1 }
    }
}

impl From<&AccessToken> for Token {
    fn from(token: &AccessToken) -> Self {
        Self::Sha1 {
            sha1: token.sha1.clone(),
        }
    }
}

/// The credentials authenticating a single API call.
///
/// Credentials are passed per call and never stored by the client. The
/// `username` is also used by endpoints whose path names the acting user
/// (access tokens) and by the self-delete guard of
/// [`GogsClient::delete_user`](crate::api::GogsClient::delete_user).
///
/// # Example
///
/// ```rust
/// use gogs_client::auth::{Credentials, Token};
///
/// let creds = Credentials::basic("admin", "hunter2");
/// assert_eq!(creds.username(), Some("admin"));
///
/// let creds = Credentials::token(Token::Sha1 { sha1: "f00d".into() });
/// assert_eq!(creds.authorization().as_deref(), Some("token f00d"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account password, used only when no token is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Access token. Takes precedence over username and password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
}

impl Credentials {
    /// Username and password credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            token: None,
        }
    }

    /// Token credentials.
    pub fn token(token: impl Into<Token>) -> Self {
        Self {
            username: None,
            password: None,
            token: Some(token.into()),
        }
    }

    /// Attaches a username, keeping any token or password already set.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Attaches a token, keeping any username or password already set.
    pub fn with_token(mut self, token: impl Into<Token>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Builds the `Authorization` header value for these credentials.
    ///
    /// See [`authorization_header`].
    pub fn authorization(&self) -> Option<String> {
        if let Some(token) = &self.token {
            return Some(format!("token {}", token.sha1()));
        }

        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(format!(
                "Basic {}",
                STANDARD.encode(format!("{}:{}", username, password))
            )),
            _ => None,
        }
    }
}

/// Builds the `Authorization` header value for optional credentials.
///
/// # Rules
///
/// | Credentials | Header |
/// |-------------|--------|
/// | `None` | none |
/// | token present | `token <sha1>` |
/// | username and password | `Basic <base64(username:password)>` |
/// | anything else | none |
///
/// This is a pure function; it performs no I/O.
pub fn authorization_header(credentials: Option<&Credentials>) -> Option<String> {
    credentials.and_then(Credentials::authorization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials() {
        assert_eq!(authorization_header(None), None);
        assert_eq!(authorization_header(Some(&Credentials::default())), None);
    }

    #[test]
    fn test_basic_header() {
        let creds = Credentials::basic("demo", "pw");
        let header = authorization_header(Some(&creds)).unwrap();
        assert_eq!(header, "Basic ZGVtbzpwdw==");

        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "demo:pw");
    }

    #[test]
    fn test_basic_requires_both_parts() {
        let only_user = Credentials {
            username: Some("demo".to_string()),
            ..Default::default()
        };
        assert_eq!(only_user.authorization(), None);

        let only_password = Credentials {
            password: Some("pw".to_string()),
            ..Default::default()
        };
        assert_eq!(only_password.authorization(), None);
    }

    #[test]
    fn test_token_wins_over_password() {
        let creds = Credentials::basic("demo", "pw").with_token("abc");
        assert_eq!(creds.authorization().as_deref(), Some("token abc"));
    }

    #[test]
    fn test_structured_token_matches_plain() {
        let plain = Credentials::token("abc");
        let structured = Credentials::token(Token::Sha1 {
            sha1: "abc".to_string(),
        });
        assert_eq!(plain.authorization(), structured.authorization());
    }

    #[test]
    fn test_empty_token_does_not_fall_through() {
        let creds = Credentials::basic("demo", "pw").with_token("");
        assert_eq!(creds.authorization().as_deref(), Some("token "));
    }

    #[test]
    fn test_deserialize_both_token_forms() {
        let creds: Credentials =
            serde_json::from_str(r#"{"username": "demo", "token": {"sha1": "abc"}}"#).unwrap();
        assert_eq!(creds.token.as_ref().map(Token::sha1), Some("abc"));

        let creds: Credentials = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(creds.token, Some(Token::Plain("abc".to_string())));

        let creds: Credentials = serde_json::from_str(r#"{"token": {}}"#).unwrap();
        assert_eq!(creds.authorization().as_deref(), Some("token "));
    }

    #[test]
    fn test_token_from_access_token() {
        let token = AccessToken {
            name: "ci".to_string(),
            sha1: "deadbeef".to_string(),
        };
        assert_eq!(Token::from(&token).sha1(), "deadbeef");
    }
}
