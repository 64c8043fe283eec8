// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the GitHub client using wiremock.
//!
//! Covers:
//! - Authenticated login and organization lookup
//! - Owner listing order
//! - Repository creation under a user and an organization
//! - HTTP errors and a missing token

use adhd_rs::config::types::{GithubConfig, Visibility};
use adhd_rs::error::{AdhdError, NetworkError};
use adhd_rs::net::{GithubClient, OwnerKind};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_with_login(login: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", "Bearer secret"))
        .and(header("accept", "application/vnd.github+json"))
        .and(header("x-github-api-version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"login": login})))
        .mount(&server)
        .await;
    server
}

fn client(server: &MockServer) -> GithubClient {
    GithubClient::new(format!("{}/", server.uri()), "secret")
}

// =============================================================================
// Owners
// =============================================================================

#[tokio::test]
async fn test_available_owners_user_first() {
    let server = server_with_login("octo").await;
    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"login": "adhd-org"}, {"login": "tools-org"}])),
        )
        .mount(&server)
        .await;

    let owners = client(&server).available_owners().await.unwrap();

    insta::assert_json_snapshot!(owners, @r#"
    [
      {
        "type": "user",
        "login": "octo"
      },
      {
        "type": "org",
        "login": "adhd-org"
      },
      {
        "type": "org",
        "login": "tools-org"
      }
    ]
    "#);
    assert_eq!(owners[0].kind, OwnerKind::User);
}

#[tokio::test]
async fn test_owner_lookup_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).available_owners().await.unwrap_err();

    match err {
        AdhdError::Network(inner) => {
            assert!(matches!(*inner, NetworkError::HttpError { status: 401, .. }));
        }
        other => panic!("expected network error, got {other}"),
    }
}

#[tokio::test]
async fn test_unexpected_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).authenticated_login().await.unwrap_err();
    assert!(err.to_string().starts_with("network error: unexpected response from"));
}

// =============================================================================
// Repository creation
// =============================================================================

#[tokio::test]
async fn test_create_user_repository() {
    let server = server_with_login("octo").await;
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(body_json(json!({
            "name": "cache_manager",
            "description": "Cache Manager",
            "private": true,
            "auto_init": false
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"html_url": "https://github.com/octo/cache_manager"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = client(&server)
        .create_repository("Octo", "cache_manager", "Cache Manager", Visibility::Private)
        .await
        .unwrap();

    assert_eq!(url, "https://github.com/octo/cache_manager");
}

#[tokio::test]
async fn test_create_org_repository_conflict() {
    let server = server_with_login("octo").await;
    Mock::given(method("POST"))
        .and(path("/orgs/adhd-org/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Repository creation failed."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .create_repository("adhd-org", "cache_manager", "Cache Manager", Visibility::Public)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("network error: http error 422: "));
    assert!(message.ends_with("/orgs/adhd-org/repos"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_from_config_requires_token() {
    let config = GithubConfig {
        token_env: "ADHD_RS_TEST_TOKEN_NEVER_SET".to_string(),
        ..GithubConfig::default()
    };

    let err = GithubClient::from_config(&config).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"network error: API token not set (expected in $ADHD_RS_TEST_TOKEN_NEVER_SET)");
}

#[test]
fn test_api_url_trailing_slash_trimmed() {
    let client = GithubClient::new("https://api.github.com/", "token");
    assert_eq!(client.api_url(), "https://api.github.com");
}
