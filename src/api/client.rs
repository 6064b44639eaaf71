//
//  gogs-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Gogs API
//!
//! This module provides [`GogsClient`], the API instance every endpoint method
//! hangs off, and its requester: the single function that turns a relative
//! command, optional credentials and an optional body into one HTTP round trip.
//!
//! ## Features
//!
//! - Base URL normalization (trailing slashes, default ports)
//! - Relative path joining with exactly one separating slash
//! - Method selection (explicit, else `POST` with a body and `GET` without)
//! - Authorization header injection (token or Basic)
//! - Pluggable [`Transport`]

use std::sync::Arc;
use std::time::Instant;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::common::{ApiError, RawResponse};
use super::endpoint::Route;
use super::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::auth::{authorization_header, Credentials};

/// An instance of a Gogs API.
///
/// Holds the parsed base URL and the transport; nothing else. It is cheap to
/// clone and safe to share between tasks, since no call mutates it.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use gogs_client::api::GogsClient;
///
/// let client = GogsClient::new("https://try.gogs.io/api/v1/")?;
/// assert_eq!(client.base_url(), "https://try.gogs.io/api/v1/");
/// assert_eq!(client.port(), 443);
/// # Ok::<(), gogs_client::api::ApiError>(())
/// ```
///
/// # Authentication
///
/// Credentials are passed per call:
///
/// ```rust,no_run
/// use gogs_client::api::GogsClient;
/// use gogs_client::auth::Credentials;
///
/// # async fn example() -> Result<(), gogs_client::api::ApiError> {
/// let client = GogsClient::new("https://try.gogs.io/api/v1")?;
/// let me = Credentials::basic("demo", "secret");
/// let repos = client.list_repos(&me).await?;
/// println!("{} repositories", repos.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GogsClient {
    /// Base URL; its path always ends in exactly one `/`
    base: Url,
    /// The transport performing round trips
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for GogsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GogsClient")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

impl GogsClient {
    /// Creates a client for the API at `api_url` using the default transport.
    ///
    /// # Parameters
    ///
    /// * `api_url` - Absolute `http` or `https` URL of the API root,
    ///   e.g. `https://try.gogs.io/api/v1`
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidUrl`] if the URL cannot be parsed
    /// - [`ApiError::UnsupportedScheme`] for schemes other than http/https
    /// - [`ApiError::Transport`] if the HTTP client cannot be created
    pub fn new(api_url: &str) -> Result<Self, ApiError> {
        Self::with_transport(api_url, Arc::new(ReqwestTransport::new()?))
    }

    /// Creates a client for the API at `api_url` using the given transport.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use gogs_client::api::{GogsClient, ReqwestTransport};
    ///
    /// let transport = Arc::new(ReqwestTransport::new()?);
    /// let client = GogsClient::with_transport("http://localhost:3000/api/v1", transport)?;
    /// assert_eq!(client.port(), 3000);
    /// # Ok::<(), gogs_client::api::ApiError>(())
    /// ```
    pub fn with_transport(api_url: &str, transport: Arc<dyn Transport>) -> Result<Self, ApiError> {
        let base = parse_base_url(api_url)?;
        Ok(Self { base, transport })
    }

    /// Returns the normalized base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Returns the URL scheme (`http` or `https`).
    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    /// Returns the server host name.
    pub fn host(&self) -> &str {
        self.base.host_str().unwrap_or_default()
    }

    /// Returns the server port, defaulting to 443 for https and 80 for http.
    pub fn port(&self) -> u16 {
        self.base.port_or_known_default().unwrap_or(80)
    }

    /// Returns the API base path, e.g. `/api/v1/`.
    pub fn api_path(&self) -> &str {
        self.base.path()
    }

    /// Joins a relative command onto the base URL.
    ///
    /// Leading slashes on `partial_path` are dropped, so exactly one slash
    /// separates the base path from the command.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `partial_path` is empty.
    pub fn resolve_url(&self, partial_path: &str) -> Result<Url, ApiError> {
        let relative = partial_path.trim_start_matches('/');
        if relative.is_empty() {
            return Err(ApiError::validation("request path is required"));
        }
        Ok(Url::parse(&format!("{}{}", self.base, relative))?)
    }

    /// Builds the request the requester would send, without sending it.
    ///
    /// # Parameters
    ///
    /// * `partial_path` - The API command relative to the base URL
    /// * `auth` - Credentials authenticating the request, if any
    /// * `body` - JSON body; `None` and `Some(Value::Null)` both mean no body
    /// * `method` - Explicit method (case-insensitive); defaults to `POST`
    ///   when a body is present and `GET` otherwise
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] for an empty path or an invalid method token
    /// - [`ApiError::Json`] if the body cannot be serialized
    pub fn build_request(
        &self,
        partial_path: &str,
        auth: Option<&Credentials>,
        body: Option<&Value>,
        method: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        let url = self.resolve_url(partial_path)?;
        let body = body.filter(|value| !value.is_null());
        let method = select_method(method, body.is_some())?;

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(value) = authorization_header(auth) {
            headers.push(("Authorization".to_string(), value));
        }

        let body = body.map(serde_json::to_string).transpose()?;

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Performs one HTTP round trip against the API.
    ///
    /// Any status code is a successful result at this layer; interpreting it
    /// is the classifier's job. Only transport failures are errors.
    ///
    /// # Errors
    ///
    /// - Everything [`build_request`](Self::build_request) returns
    /// - [`ApiError::Transport`] if no response was received
    pub async fn request(
        &self,
        partial_path: &str,
        auth: Option<&Credentials>,
        body: Option<&Value>,
        method: Option<&str>,
    ) -> Result<RawResponse, ApiError> {
        let request = self.build_request(partial_path, auth, body, method)?;
        let method = request.method.clone();
        let url = request.url.clone();

        tracing::debug!("{} {}", method, url);
        let started = Instant::now();

        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(
                    "{} {} -> {} ({} ms)",
                    method,
                    url,
                    response.status,
                    started.elapsed().as_millis()
                );
                Ok(response)
            }
            Err(e) => {
                tracing::debug!("{} {} failed: {}", method, url, e);
                Err(e)
            }
        }
    }

    /// Renders a route, sends it and classifies the response.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        route: &Route,
        params: &[(&str, &str)],
        body: Option<Value>,
        auth: Option<&Credentials>,
    ) -> Result<T, ApiError> {
        let path = route.render(params)?;
        let response = self
            .request(&path, auth, body.as_ref(), Some(route.method.as_str()))
            .await?;
        route.expect.classify(response)
    }
}

fn parse_base_url(api_url: &str) -> Result<Url, ApiError> {
    let trimmed = api_url.trim().trim_end_matches('/');
    let base = Url::parse(&format!("{}/", trimmed))?;

    match base.scheme() {
        "http" | "https" => Ok(base),
        other => Err(ApiError::UnsupportedScheme(other.to_string())),
    }
}

fn select_method(method: Option<&str>, has_body: bool) -> Result<Method, ApiError> {
    match method {
        Some(name) => Method::from_bytes(name.to_uppercase().as_bytes())
            .map_err(|_| ApiError::validation(format!("invalid HTTP method '{}'", name))),
        None if has_body => Ok(Method::POST),
        None => Ok(Method::GET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(url: &str) -> GogsClient {
        GogsClient::new(url).unwrap()
    }

    #[test]
    fn test_base_url_normalization() {
        let c = client("https://try.gogs.io/api/v1///");
        assert_eq!(c.base_url(), "https://try.gogs.io/api/v1/");
        assert_eq!(c.api_path(), "/api/v1/");
        assert_eq!(c.host(), "try.gogs.io");
        assert_eq!(c.scheme(), "https");
        assert_eq!(c.port(), 443);
    }

    #[test]
    fn test_default_and_explicit_ports() {
        assert_eq!(client("http://gogs.local/api/v1").port(), 80);
        assert_eq!(client("http://gogs.local:3000/api/v1").port(), 3000);
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        let err = GogsClient::new("ftp://gogs.local/api/v1").unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[test]
    fn test_rejects_unparsable_url() {
        assert!(matches!(
            GogsClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_resolve_url_single_slash() {
        for base in ["https://g.io/api/v1", "https://g.io/api/v1/"] {
            let c = client(base);
            for path in ["users/demo", "/users/demo", "//users/demo"] {
                assert_eq!(
                    c.resolve_url(path).unwrap().as_str(),
                    "https://g.io/api/v1/users/demo"
                );
            }
        }
    }

    #[test]
    fn test_resolve_url_keeps_query() {
        let c = client("https://g.io/api/v1");
        let url = c.resolve_url("users/search?q=jo&limit=5").unwrap();
        assert_eq!(url.path(), "/api/v1/users/search");
        assert_eq!(url.query(), Some("q=jo&limit=5"));
    }

    #[test]
    fn test_empty_path_is_validation_error() {
        let c = client("https://g.io/api/v1");
        assert!(matches!(c.resolve_url(""), Err(ApiError::Validation(_))));
        assert!(matches!(c.resolve_url("/"), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_method_selection() {
        assert_eq!(select_method(None, false).unwrap(), Method::GET);
        assert_eq!(select_method(None, true).unwrap(), Method::POST);
        assert_eq!(select_method(Some("delete"), false).unwrap(), Method::DELETE);
        assert_eq!(select_method(Some("patch"), true).unwrap(), Method::PATCH);
        assert!(select_method(Some("bad method"), false).is_err());
    }

    #[test]
    fn test_build_request_with_body() {
        let c = client("https://g.io/api/v1");
        let creds = Credentials::token("abc");
        let body = json!({"name": "hello"});
        let req = c
            .build_request("/user/repos", Some(&creds), Some(&body), None)
            .unwrap();

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url.as_str(), "https://g.io/api/v1/user/repos");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("authorization"), Some("token abc"));
        let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, body);
    }

    #[test]
    fn test_build_request_without_auth_or_body() {
        let c = client("https://g.io/api/v1");
        let req = c.build_request("users/demo", None, None, None).unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.header("authorization"), None);
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert!(req.body.is_none());
    }

    #[test]
    fn test_null_body_is_no_body() {
        let c = client("https://g.io/api/v1");
        let req = c
            .build_request("users/demo", None, Some(&Value::Null), None)
            .unwrap();
        assert_eq!(req.method, Method::GET);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_body_sent_with_explicit_method() {
        let c = client("https://g.io/api/v1");
        let body = json!({"email": "d@x.com"});
        let req = c
            .build_request("admin/users/demo", None, Some(&body), Some("patch"))
            .unwrap();
        assert_eq!(req.method, Method::PATCH);
        assert!(req.body.is_some());
    }

    /// Answers every request with its own method and path.
    struct Echo;

    #[async_trait::async_trait]
    impl Transport for Echo {
        async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
            Ok(RawResponse::new(
                200,
                format!("{} {}", request.method, request.url.path()),
            ))
        }
    }

    #[test]
    fn test_request_goes_through_transport() {
        let c = GogsClient::with_transport("https://g.io/api/v1", Arc::new(Echo)).unwrap();
        let response = tokio_test::block_on(c.request("user/keys/9", None, None, Some("delete")))
            .unwrap();
        assert_eq!(response, RawResponse::new(200, "DELETE /api/v1/user/keys/9"));
    }
}
