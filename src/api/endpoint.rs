//
//  gogs-client
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Endpoint Table
//!
//! Every API method is a [`Route`]: an HTTP verb, a relative path template and
//! the [`Expect`] classification of its response. The routes are declared once
//! in [`routes`] and rendered per call.
//!
//! ## Path Templates
//!
//! Placeholders are written as `{name}` and filled in a single pass, so a
//! value is never scanned for further placeholders. Values in the path part
//! are percent-encoded as one path segment each, except `{full_name}`, which
//! is encoded per `/`-separated part. Values in the query part are
//! form-encoded. A path value of `.` or `..` is rejected.
//!
//! ```rust
//! use gogs_client::api::endpoint::routes;
//!
//! let path = routes::SEARCH_USERS.render(&[("q", "jo hn"), ("limit", "5")]).unwrap();
//! assert_eq!(path, "users/search?q=jo+hn&limit=5");
//!
//! let path = routes::GET_USER.render(&[("username", "a/b#c")]).unwrap();
//! assert_eq!(path, "users/a%2Fb%23c");
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use url::form_urlencoded;

use super::common::ApiError;
use super::response::Expect;
use crate::auth::Credentials;

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Placeholders whose values span several path segments.
const MULTI_SEGMENT: &[&str] = &["full_name"];

/// Result count used by the search endpoints when the caller gives none.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// A declarative endpoint descriptor.
#[derive(Debug, Clone)]
pub struct Route {
    /// HTTP verb.
    pub method: Method,

    /// Relative path template, without a leading slash.
    pub path: &'static str,

    /// How the response is classified.
    pub expect: Expect,
}

impl Route {
    pub const fn new(method: Method, path: &'static str, expect: Expect) -> Self {
        Self {
            method,
            path,
            expect,
        }
    }

    /// Renders the path template with the given placeholder values.
    ///
    /// Unknown placeholders are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when a path value is `.` or `..`,
    /// which URL resolution would collapse into a different path.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, ApiError> {
        let (path, query) = match self.path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (self.path, None),
        };

        let mut rendered = substitute(path, params, encode_path_value)?;

        if let Some(query) = query {
            rendered.push('?');
            rendered.push_str(&substitute(query, params, |_, value| {
                Ok(form_urlencoded::byte_serialize(value.as_bytes()).collect())
            })?);
        }

        Ok(rendered)
    }
}

fn substitute(
    template: &str,
    params: &[(&str, &str)],
    encode: impl Fn(&str, &str) -> Result<String, ApiError>,
) -> Result<String, ApiError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };

        let name = &after[..close];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(&encode(name, value)?),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

fn encode_path_value(name: &str, value: &str) -> Result<String, ApiError> {
    if MULTI_SEGMENT.contains(&name) {
        value
            .split('/')
            .map(encode_segment)
            .collect::<Result<Vec<_>, _>>()
            .map(|parts| parts.join("/"))
    } else {
        encode_segment(value)
    }
}

fn encode_segment(segment: &str) -> Result<String, ApiError> {
    if segment == "." || segment == ".." {
        return Err(ApiError::validation(format!(
            "'{}' is not a valid path segment",
            segment
        )));
    }
    Ok(utf8_percent_encode(segment, PATH_SEGMENT).to_string())
}

/// Resolves a caller-supplied search limit; `None` and `0` mean the default.
pub(crate) fn search_limit(limit: Option<u32>) -> u32 {
    limit.filter(|l| *l > 0).unwrap_or(DEFAULT_SEARCH_LIMIT)
}

/// Rejects a blank required argument before any network call.
pub(crate) fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} is required", what)));
    }
    Ok(value)
}

/// The username of the acting user, for routes that embed it in the path.
pub(crate) fn acting_username(auth: &Credentials) -> Result<&str, ApiError> {
    required(auth.username().unwrap_or_default(), "credentials username")
}

/// The complete endpoint table.
///
/// | Route | Verb | Path | Success |
/// |-------|------|------|---------|
/// | `CREATE_USER` | POST | `admin/users` | 201 |
/// | `EDIT_USER` | PATCH | `admin/users/{username}` | 200 |
/// | `DELETE_USER` | DELETE | `admin/users/{username}` | 204 |
/// | `SEARCH_USERS` | GET | `users/search?q={q}&limit={limit}` | envelope |
/// | `GET_USER` | GET | `users/{username}` | 200 |
/// | `SEARCH_REPOS` | GET | `repos/search?q={q}&uid={uid}&limit={limit}` | envelope |
/// | `CREATE_REPO` | POST | `user/repos` | 201 |
/// | `GET_REPO` | GET | `repos/{full_name}` | 200 |
/// | `LIST_REPOS` | GET | `user/repos` | 200 |
/// | `DELETE_REPO` | DELETE | `repos/{owner}/{repo}` | 204 |
/// | `CREATE_TOKEN` | POST | `users/{username}/tokens` | 201 |
/// | `LIST_TOKENS` | GET | `users/{username}/tokens` | 200 |
/// | `CREATE_PUBLIC_KEY` | POST | `user/keys` | 201 |
/// | `LIST_PUBLIC_KEYS` | GET | `users/{username}/keys` | 200 |
/// | `GET_PUBLIC_KEY` | GET | `user/keys/{id}` | 200 |
/// | `DELETE_PUBLIC_KEY` | DELETE | `user/keys/{id}` | 204 |
pub mod routes {
    use super::{Expect, Method, Route};

    const OK: Expect = Expect::Status(&[200]);
    const CREATED: Expect = Expect::Status(&[201]);

    pub const CREATE_USER: Route = Route::new(Method::POST, "admin/users", CREATED);
    pub const EDIT_USER: Route = Route::new(Method::PATCH, "admin/users/{username}", OK);
    pub const DELETE_USER: Route =
        Route::new(Method::DELETE, "admin/users/{username}", Expect::NoContent);
    pub const SEARCH_USERS: Route = Route::new(
        Method::GET,
        "users/search?q={q}&limit={limit}",
        Expect::Envelope,
    );
    pub const GET_USER: Route = Route::new(Method::GET, "users/{username}", OK);

    pub const SEARCH_REPOS: Route = Route::new(
        Method::GET,
        "repos/search?q={q}&uid={uid}&limit={limit}",
        Expect::Envelope,
    );
    pub const CREATE_REPO: Route = Route::new(Method::POST, "user/repos", CREATED);
    pub const GET_REPO: Route = Route::new(Method::GET, "repos/{full_name}", OK);
    pub const LIST_REPOS: Route = Route::new(Method::GET, "user/repos", OK);
    pub const DELETE_REPO: Route =
        Route::new(Method::DELETE, "repos/{owner}/{repo}", Expect::NoContent);

    pub const CREATE_TOKEN: Route = Route::new(Method::POST, "users/{username}/tokens", CREATED);
    pub const LIST_TOKENS: Route = Route::new(Method::GET, "users/{username}/tokens", OK);

    pub const CREATE_PUBLIC_KEY: Route = Route::new(Method::POST, "user/keys", CREATED);
    pub const LIST_PUBLIC_KEYS: Route = Route::new(Method::GET, "users/{username}/keys", OK);
    pub const GET_PUBLIC_KEY: Route = Route::new(Method::GET, "user/keys/{id}", OK);
    pub const DELETE_PUBLIC_KEY: Route =
        Route::new(Method::DELETE, "user/keys/{id}", Expect::NoContent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_path_placeholders() {
        assert_eq!(
            routes::DELETE_REPO
                .render(&[("owner", "demo"), ("repo", "hello")])
                .unwrap(),
            "repos/demo/hello"
        );
        assert_eq!(
            routes::GET_REPO.render(&[("full_name", "demo/hello")]).unwrap(),
            "repos/demo/hello"
        );
    }

    #[test]
    fn test_render_is_single_pass() {
        assert_eq!(
            routes::DELETE_REPO
                .render(&[("owner", "{repo}"), ("repo", "x")])
                .unwrap(),
            "repos/%7Brepo%7D/x"
        );
        let route = Route::new(Method::GET, "users/{username}/{id}", Expect::Status(&[200]));
        assert_eq!(
            route.render(&[("username", "{id}"), ("id", "7")]).unwrap(),
            "users/%7Bid%7D/7"
        );
    }

    #[test]
    fn test_render_encodes_path_segments() {
        assert_eq!(
            routes::DELETE_USER
                .render(&[("username", "../../repos/victim/project")])
                .unwrap(),
            "admin/users/..%2F..%2Frepos%2Fvictim%2Fproject"
        );
        assert_eq!(
            routes::GET_USER.render(&[("username", "a#b?c d")]).unwrap(),
            "users/a%23b%3Fc%20d"
        );
        assert_eq!(
            routes::GET_REPO.render(&[("full_name", "de mo/hel#lo")]).unwrap(),
            "repos/de%20mo/hel%23lo"
        );
        assert_eq!(
            routes::GET_USER.render(&[("username", "j.doe-1_~")]).unwrap(),
            "users/j.doe-1_~"
        );
    }

    #[test]
    fn test_render_rejects_dot_segments() {
        assert!(routes::GET_USER.render(&[("username", "..")]).is_err());
        assert!(routes::DELETE_REPO
            .render(&[("owner", "."), ("repo", "x")])
            .is_err());
        assert!(routes::GET_REPO
            .render(&[("full_name", "demo/../admin")])
            .is_err());
    }

    #[test]
    fn test_render_encodes_query_values() {
        let path = routes::SEARCH_REPOS
            .render(&[("q", "a&b"), ("uid", "0"), ("limit", "10")])
            .unwrap();
        assert_eq!(path, "repos/search?q=a%26b&uid=0&limit=10");
    }

    #[test]
    fn test_render_without_params() {
        assert_eq!(routes::LIST_REPOS.render(&[]).unwrap(), "user/repos");
        assert_eq!(
            routes::GET_USER.render(&[]).unwrap(),
            "users/{username}"
        );
    }

    #[test]
    fn test_search_limit_defaults() {
        assert_eq!(search_limit(None), DEFAULT_SEARCH_LIMIT);
        assert_eq!(search_limit(Some(0)), DEFAULT_SEARCH_LIMIT);
        assert_eq!(search_limit(Some(3)), 3);
    }

    #[test]
    fn test_required_rejects_blank() {
        assert!(required("  ", "username").is_err());
        assert_eq!(required("demo", "username").unwrap(), "demo");
        assert!(acting_username(&Credentials::token("abc")).is_err());
        assert_eq!(
            acting_username(&Credentials::basic("demo", "pw")).unwrap(),
            "demo"
        );
    }

    #[test]
    fn test_route_verbs() {
        assert_eq!(routes::EDIT_USER.method, Method::PATCH);
        assert_eq!(routes::DELETE_PUBLIC_KEY.method, Method::DELETE);
        assert_eq!(routes::CREATE_TOKEN.expect, Expect::Status(&[201]));
        assert_eq!(routes::SEARCH_USERS.expect, Expect::Envelope);
    }
}
