// adhd-rs: ADHD Framework Project Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub REST client used when creating module repositories.
//!
//! ```text
//! GithubClient::from_config()      token from $GITHUB_TOKEN (configurable)
//!   authenticated_login()   GET  /user            -> login
//!   owned_organizations()   GET  /user/orgs       -> [login]
//!   available_owners()      user first, then orgs
//!   create_repository()     POST /user/repos           (owner == login)
//!                           POST /orgs/{owner}/repos   (otherwise)
//!                           -> html_url
//!
//! Global client: OnceLock, connection pool, keep-alive
//! ```

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::config::types::{GithubConfig, Visibility};
use crate::error::{AdhdResult, NetworkError};

/// Global HTTP client - initialized once, reused across requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("adhd-rs/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Kind of account that can own a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    User,
    Org,
}

/// Account a new repository can be created under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    #[serde(rename = "type")]
    pub kind: OwnerKind,
    pub login: String,
}

#[derive(Debug, Deserialize)]
struct Account {
    login: String,
}

#[derive(Debug, Deserialize)]
struct CreatedRepository {
    html_url: String,
}

#[derive(Debug, Serialize)]
struct NewRepository<'a> {
    name: &'a str,
    description: &'a str,
    private: bool,
    auto_init: bool,
}

/// Authenticated GitHub API client.
#[derive(Debug, Clone)]
pub struct GithubClient {
    api_url: String,
    token: String,
}

impl GithubClient {
    #[must_use]
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Client for the configured API, with the token read from the environment.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::MissingToken` if the token variable is unset or empty.
    pub fn from_config(config: &GithubConfig) -> AdhdResult<Self> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| NetworkError::MissingToken {
                variable: config.token_env.clone(),
            })?;
        Ok(Self::new(&config.api_url, token))
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        global_client()
            .request(method, format!("{}{path}", self.api_url))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> AdhdResult<T> {
        let response = request.send().await.map_err(NetworkError::from)?;
        let response = check_status(response)?;
        let url = response.url().to_string();
        response
            .json::<T>()
            .await
            .map_err(|e| {
                NetworkError::UnexpectedResponse {
                    url,
                    message: e.to_string(),
                }
                .into()
            })
    }

    /// Login of the token's owner.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` for transport failures and non-2xx responses.
    pub async fn authenticated_login(&self) -> AdhdResult<String> {
        let account: Account = Self::send_json(self.request(Method::GET, "/user")).await?;
        debug!(login = %account.login, "authenticated");
        Ok(account.login)
    }

    /// Logins of the organizations the authenticated user belongs to.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` for transport failures and non-2xx responses.
    pub async fn owned_organizations(&self) -> AdhdResult<Vec<String>> {
        let orgs: Vec<Account> = Self::send_json(self.request(Method::GET, "/user/orgs")).await?;
        Ok(orgs.into_iter().map(|org| org.login).collect())
    }

    /// The authenticated user followed by their organizations.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if either lookup fails.
    pub async fn available_owners(&self) -> AdhdResult<Vec<Owner>> {
        let login = self.authenticated_login().await?;
        let orgs = self.owned_organizations().await?;

        let mut owners = vec![Owner {
            kind: OwnerKind::User,
            login,
        }];
        owners.extend(orgs.into_iter().map(|login| Owner {
            kind: OwnerKind::Org,
            login,
        }));
        Ok(owners)
    }

    /// Creates `owner/name` and returns its web URL.
    ///
    /// The user endpoint is used when `owner` is the authenticated login,
    /// the organization endpoint otherwise.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` for transport failures and non-2xx responses
    /// (for example 422 when the repository already exists).
    pub async fn create_repository(
        &self,
        owner: &str,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> AdhdResult<String> {
        let login = self.authenticated_login().await?;
        let path = if owner.eq_ignore_ascii_case(&login) {
            "/user/repos".to_string()
        } else {
            format!("/orgs/{owner}/repos")
        };

        let body = NewRepository {
            name,
            description,
            private: visibility.is_private(),
            auto_init: false,
        };
        let created: CreatedRepository =
            Self::send_json(self.request(Method::POST, &path).json(&body)).await?;
        info!(owner, name, url = %created.html_url, "created repository");
        Ok(created.html_url)
    }
}

fn check_status(response: Response) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(NetworkError::HttpError {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}
