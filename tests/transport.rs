//
//  gogs-client
//  tests/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Tests with a recording transport in place of the network

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gogs_client::api::{
    ApiError, CreateAccessTokenOption, CreateRepoOption, GogsClient, HttpRequest, RawResponse,
    Transport,
};
use gogs_client::auth::Credentials;
use reqwest::Method;

/// Records every request and answers each with the same canned response.
struct Recording {
    requests: Mutex<Vec<HttpRequest>>,
    reply: RawResponse,
}

impl Recording {
    fn replying(status: u16, data: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: RawResponse::new(status, data),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Transport for Recording {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().expect("lock").push(request);
        Ok(self.reply.clone())
    }
}

fn client_with(transport: &Arc<Recording>) -> GogsClient {
    GogsClient::with_transport("https://git.example.com/api/v1", transport.clone())
        .expect("valid API URL")
}

// === Local short-circuits ===

#[tokio::test]
async fn test_blank_search_makes_no_request() {
    let transport = Recording::replying(500, "");
    let client = client_with(&transport);

    assert!(client.search_users("   ", Some(5), None).await.unwrap().is_empty());
    assert!(client.search_repos("", None, None).await.unwrap().is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_self_delete_is_rejected_locally() {
    let transport = Recording::replying(204, "");
    let client = client_with(&transport);

    let err = client
        .delete_user("demo", &Credentials::basic("demo", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert!(err.is_local());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_token_routes_need_a_username() {
    let transport = Recording::replying(201, r#"{"name": "ci", "sha1": "x"}"#);
    let client = client_with(&transport);
    let auth = Credentials::token("f00d");

    let err = client
        .create_token(&CreateAccessTokenOption::new("ci"), &auth)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = client.list_tokens(&auth).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_blank_required_arguments() {
    let transport = Recording::replying(200, "{}");
    let client = client_with(&transport);
    let auth = Credentials::basic("demo", "pw");

    assert!(client.get_user("", None).await.is_err());
    assert!(client.get_repo("  ", None).await.is_err());
    assert!(client.delete_repo("", "hello", &auth).await.is_err());
    assert!(client
        .create_repo(&CreateRepoOption::new(""), &auth)
        .await
        .is_err());
    assert!(transport.requests().is_empty());
}

// === Request shape ===

#[tokio::test]
async fn test_request_shape_for_each_verb() {
    let transport = Recording::replying(204, "");
    let client = client_with(&transport);
    let auth = Credentials::token("f00d");

    client.delete_public_key(9, &auth).await.expect("204 means deleted");
    client
        .delete_repo("demo", "hello", &auth)
        .await
        .expect("204 means deleted");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(
        requests[0].url.as_str(),
        "https://git.example.com/api/v1/user/keys/9"
    );
    assert_eq!(requests[0].header("authorization"), Some("token f00d"));
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
    assert_eq!(requests[0].body, None);

    assert_eq!(
        requests[1].url.as_str(),
        "https://git.example.com/api/v1/repos/demo/hello"
    );
}

#[tokio::test]
async fn test_path_identifiers_stay_in_their_segment() {
    let transport = Recording::replying(204, "");
    let client = client_with(&transport);
    let admin = Credentials::basic("admin", "pw");

    client
        .delete_user("../../repos/victim/project", &admin)
        .await
        .expect("204 means deleted");
    client
        .delete_user("x/../admin", &admin)
        .await
        .expect("204 means deleted");
    client
        .delete_repo("{repo}", "x", &admin)
        .await
        .expect("204 means deleted");
    let _ = client.get_user("a#b", None).await;

    let urls: Vec<String> = transport
        .requests()
        .iter()
        .map(|request| request.url.to_string())
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://git.example.com/api/v1/admin/users/..%2F..%2Frepos%2Fvictim%2Fproject",
            "https://git.example.com/api/v1/admin/users/x%2F..%2Fadmin",
            "https://git.example.com/api/v1/repos/%7Brepo%7D/x",
            "https://git.example.com/api/v1/users/a%23b",
        ]
    );
}

#[tokio::test]
async fn test_dot_segments_make_no_request() {
    let transport = Recording::replying(204, "");
    let client = client_with(&transport);
    let admin = Credentials::basic("admin", "pw");

    let err = client.delete_user("..", &admin).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(client.get_repo("demo/..", None).await.is_err());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_search_query_is_encoded() {
    let transport = Recording::replying(200, r#"{"ok": true, "data": []}"#);
    let client = client_with(&transport);

    let repos = client
        .search_repos("a&b c", Some(42), Some(3))
        .await
        .expect("search should succeed");
    assert!(repos.is_empty());

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(
        requests[0].url.as_str(),
        "https://git.example.com/api/v1/repos/search?q=a%26b+c&uid=42&limit=3"
    );
    assert_eq!(requests[0].header("authorization"), None);
}

#[tokio::test]
async fn test_create_repo_sends_json_body() {
    let transport = Recording::replying(201, r#"{"id": 1, "name": "hello", "full_name": "demo/hello"}"#);
    let client = client_with(&transport);

    let repo = client
        .create_repo(
            &CreateRepoOption::new("hello").private(true),
            &Credentials::basic("demo", "pw"),
        )
        .await
        .expect("create should succeed");
    assert_eq!(repo.full_name, "demo/hello");

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::POST);
    let body: serde_json::Value =
        serde_json::from_str(requests[0].body.as_deref().expect("body")).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({ "name": "hello", "description": "", "private": true })
    );
}

#[tokio::test]
async fn test_undecodable_success_body_is_json_error() {
    let transport = Recording::replying(200, "<html>oops</html>");
    let client = client_with(&transport);

    let err = client.get_user("demo", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Json(_)));
}
