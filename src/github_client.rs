use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::error::Error;
use tracing::debug;

/// Source of GitHub user data, split out so the orchestrator can be driven
/// by scripted responses in tests.
#[async_trait]
pub trait UserFetcher: Send + Sync {
    /// Fetch the profile body for `name`.
    async fn fetch_user(&self, name: &str) -> Result<Value, Box<dyn Error + Send + Sync>>;

    /// Fetch the repository listing body for `name`.
    async fn fetch_user_repos(&self, name: &str) -> Result<Value, Box<dyn Error + Send + Sync>>;
}

/// Thin wrapper over the GitHub REST API for user lookups.
///
/// Responses are decoded as generic JSON and handed back without status
/// validation: a 404 or rate-limit body decodes like any success and flows
/// to the caller, which decides what the missing fields mean.
pub struct GitHubClient {
    client: Client,
    token: String,
}

impl GitHubClient {
    /// Create a client. An empty `token` is permitted: requests go out
    /// unauthenticated and are subject to GitHub's anonymous rate limit.
    pub fn new(token: String) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let client = Client::builder()
            .user_agent("Rust GitHub User Lookup")
            .build()?;

        Ok(GitHubClient { client, token })
    }

    async fn get_json(&self, url: &str) -> Result<Value, Box<dyn Error + Send + Sync>> {
        debug!("Requesting URL: {}", url);
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        if !self.token.trim().is_empty() {
            request = request.header("Authorization", format!("token {}", self.token));
        }

        let response = request.send().await?;

        // Status is deliberately not checked here: GitHub's error bodies
        // (404 unknown user, 403 rate limit) are JSON and are stored like
        // results; the view layer treats a body without `login` as empty.
        let json: Value = response.json().await?;
        Ok(json)
    }
}

#[async_trait]
impl UserFetcher for GitHubClient {
    async fn fetch_user(&self, name: &str) -> Result<Value, Box<dyn Error + Send + Sync>> {
        let url = format!("https://api.github.com/users/{}", name);
        self.get_json(&url).await
    }

    async fn fetch_user_repos(&self, name: &str) -> Result<Value, Box<dyn Error + Send + Sync>> {
        let url = format!("https://api.github.com/users/{}/repos", name);
        self.get_json(&url).await
    }
}
