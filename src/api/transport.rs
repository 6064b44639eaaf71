//
//  gogs-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The transport is the only component that touches the network. The
//! requester builds a complete [`HttpRequest`] and hands it to a
//! [`Transport`], which performs exactly one round trip and returns the
//! status code and the full body as a [`RawResponse`].
//!
//! An HTTP error status is *not* a transport failure. Only requests that never
//! produced a response (connection refused, DNS, TLS) return an error here.
//!
//! ## Custom Transports
//!
//! ```rust
//! use async_trait::async_trait;
//! use gogs_client::api::common::{ApiError, RawResponse};
//! use gogs_client::api::transport::{HttpRequest, Transport};
//!
//! struct AlwaysNotFound;
//!
//! #[async_trait]
//! impl Transport for AlwaysNotFound {
//!     async fn send(&self, _request: HttpRequest) -> Result<RawResponse, ApiError> {
//!         Ok(RawResponse::new(404, ""))
//!     }
//! }
//! ```

use async_trait::async_trait;
use reqwest::{Client, Method};
use url::Url;

use super::common::{ApiError, RawResponse};

/// A fully built HTTP request described as plain data.
///
/// Produced by [`GogsClient::build_request`](super::GogsClient::build_request).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,

    /// Absolute request URL.
    pub url: Url,

    /// Header name/value pairs, in insertion order.
    pub headers: Vec<(String, String)>,

    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The capability of performing one HTTP round trip.
///
/// Implementations must not retry and must return the complete body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and collects the full response.
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError>;
}

/// The default [`Transport`], backed by `reqwest` with rustls.
///
/// The URL scheme selects plain HTTP or TLS; ports default to 80 and 443.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the crate's `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("gogs-client/{}", crate::VERSION))
                .build()?,
        })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        let mut builder = self.http.request(request.method, request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let data = response.text().await?;

        Ok(RawResponse { status, data })
    }
}
