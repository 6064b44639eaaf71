//
//  gogs-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by every layer of the API client:
//! the raw transport result and the unified error type.
//!
//! # Overview
//!
//! - [`RawResponse`] - The unparsed `{status, data}` pair produced by a round trip
//! - [`ApiError`] - Unified error type for all API operations
//!
//! # Example
//!
//! ```rust
//! use gogs_client::api::common::{ApiError, RawResponse};
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(e) if e.is_not_found() => "missing".to_string(),
//!         Err(ApiError::Validation(msg)) => format!("bad input: {}", msg),
//!         Err(e) => e.to_string(),
//!     }
//! }
//!
//! let err = ApiError::Status(RawResponse::new(404, "{}"));
//! assert_eq!(describe(Err(err)), "missing");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unparsed result of a single HTTP round trip.
///
/// `RawResponse` is produced by a [`Transport`](crate::api::transport::Transport)
/// and consumed by the response classifiers in [`crate::api::response`]. The
/// body is kept as raw text so that a failed classification can hand the
/// caller exactly what the service sent.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `status` | `u16` | Numeric HTTP status code |
/// | `data` | `String` | Raw response body text |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    /// Numeric HTTP status code.
    pub status: u16,

    /// Raw, unparsed response body.
    #[serde(default)]
    pub data: String,
}

impl RawResponse {
    /// Creates a response from a status code and a body.
    pub fn new(status: u16, data: impl Into<String>) -> Self {
        Self {
            status,
            data: data.into(),
        }
    }
}

/// Unified error type for all Gogs API operations.
///
/// `ApiError` keeps the four failure families apart so callers can branch on
/// them without string matching:
///
/// | Variant | Raised by | Network call made |
/// |---------|-----------|-------------------|
/// | `Validation` | endpoint methods, requester | No |
/// | `Status` | classifiers | Yes |
/// | `Transport` | transport | Attempted |
/// | `Json` | body encoding / response decoding | Depends |
/// | `InvalidUrl`, `UnsupportedScheme` | client construction | No |
///
/// # Example
///
/// ```rust
/// use gogs_client::api::common::{ApiError, RawResponse};
///
/// let err = ApiError::Status(RawResponse::new(401, "unauthorized"));
/// assert_eq!(err.status(), Some(401));
/// assert_eq!(err.body(), Some("unauthorized"));
/// ```
///
/// # Notes
///
/// - The `Transport` variant converts from `reqwest::Error`
/// - A search response whose envelope lacks a truthy `ok` is reported as
///   `Status`, identical to an unexpected status code
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required argument was missing or blank.
    ///
    /// Always raised before any request leaves the process.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The service answered with a status outside the accepted set, or a
    /// search envelope without a truthy `ok` field.
    ///
    /// Carries the complete response so callers can inspect status and body.
    #[error("Unexpected response ({}): {}", .0.status, .0.data)]
    Status(RawResponse),

    /// The request never produced an HTTP response.
    ///
    /// Covers connection refusal, DNS resolution and TLS failures.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A body could not be encoded, or an accepted response could not be
    /// decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API URL given at construction could not be parsed.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API URL uses a scheme other than `http` or `https`.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl ApiError {
    /// Returns the HTTP status code for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(response) => Some(response.status),
            _ => None,
        }
    }

    /// Returns the raw response body for `Status` errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status(response) => Some(&response.data),
            _ => None,
        }
    }

    /// Returns the full response for `Status` errors.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::Status(response) => Some(response),
            _ => None,
        }
    }

    /// Checks whether the service reported 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Checks whether the service rejected the credentials (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Checks whether the error was raised locally, before any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidUrl(_) | Self::UnsupportedScheme(_)
        )
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
