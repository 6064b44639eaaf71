//
//  gogs-client
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Host Configuration Module
//!
//! Defaults and normalization for Gogs API URLs.
//!
//! ## Usage
//!
//! ```rust
//! use gogs_client::config::{normalize_api_url, profile_name, DEFAULT_API_URL};
//!
//! assert_eq!(normalize_api_url("git.example.com"), "https://git.example.com/api/v1");
//! assert_eq!(normalize_api_url("http://localhost:3000/api/v1//"), "http://localhost:3000/api/v1");
//! assert_eq!(profile_name(DEFAULT_API_URL), "try.gogs.io");
//! ```

use url::Url;

/// The public Gogs demo instance, used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://try.gogs.io/api/v1";

/// The API root path of a Gogs server.
pub const API_PATH: &str = "/api/v1";

/// Normalizes a user-supplied API URL.
///
/// - Surrounding whitespace and trailing slashes are removed
/// - A missing scheme defaults to `https://`
/// - A bare host (no path) gets [`API_PATH`] appended
///
/// Strings that still do not parse are returned trimmed, unchanged otherwise;
/// [`GogsClient::new`](crate::api::GogsClient::new) reports them.
pub fn normalize_api_url(api_url: &str) -> String {
    let trimmed = api_url.trim().trim_end_matches('/');
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    match Url::parse(&with_scheme) {
        Ok(url) if url.path() == "/" || url.path().is_empty() => {
            format!("{}{}", with_scheme, API_PATH)
        }
        Ok(_) => with_scheme,
        Err(_) => trimmed.to_string(),
    }
}

/// Derives a default profile name (the host name) from an API URL.
pub fn profile_name(api_url: &str) -> String {
    Url::parse(&normalize_api_url(api_url))
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| "default".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_scheme_and_path() {
        assert_eq!(normalize_api_url("try.gogs.io"), DEFAULT_API_URL);
        assert_eq!(normalize_api_url("https://try.gogs.io/"), DEFAULT_API_URL);
    }

    #[test]
    fn test_normalize_keeps_custom_path() {
        assert_eq!(
            normalize_api_url(" https://example.com/gogs/api/v1/ "),
            "https://example.com/gogs/api/v1"
        );
    }

    #[test]
    fn test_profile_name() {
        assert_eq!(profile_name("http://localhost:3000/api/v1"), "localhost");
        assert_eq!(profile_name(""), "default");
    }
}
