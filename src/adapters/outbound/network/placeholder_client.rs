use crate::directory::domain::{Post, User};
use crate::ports::outbound::UserRepository;
use crate::shared::error::DirectoryError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Base URL of the public JSONPlaceholder API
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// PlaceholderUserRepository adapter for the JSONPlaceholder REST API
///
/// Implements the UserRepository port over plain `GET` requests:
/// `/users`, `/users/{id}` and `/posts?userId={id}`.
///
/// There is no retry policy here. Any network error, non-success status or
/// undecodable body is returned as a failure; retrying is the caller's call.
pub struct PlaceholderUserRepository {
    client: reqwest::Client,
    base_url: String,
}

impl PlaceholderUserRepository {
    /// Creates a repository for the public API with default settings
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a repository for any JSONPlaceholder-compatible server
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Self::validate_base_url(base_url)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("user-directory/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Accepts absolute http(s) URLs and strips trailing slashes
    fn validate_base_url(base_url: &str) -> Result<String> {
        let parsed = Url::parse(base_url).map_err(|e| DirectoryError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DirectoryError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            }
            .into());
        }

        Ok(base_url.trim_end_matches('/').to_string())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status code {} for {}", response.status(), url);
        }

        let body = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode response from {}", url))?;
        Ok(body)
    }
}

#[async_trait]
impl UserRepository for PlaceholderUserRepository {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.get_json("/users").await
    }

    async fn fetch_user(&self, user_id: u32) -> Result<User> {
        self.get_json(&format!("/users/{}", user_id)).await
    }

    async fn fetch_posts(&self, user_id: u32) -> Result<Vec<Post>> {
        self.get_json(&format!("/posts?userId={}", user_id)).await
    }
}
