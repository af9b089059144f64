use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

/// GitHub REST API client
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    ///
    /// Without a token requests are anonymous and subject to the lower rate limit.
    pub fn new(token: Option<&str>) -> Self {
        Self::with_base_url("https://api.github.com", token)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str, token: Option<&str>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Detect rate limiting: 403 with x-ratelimit-remaining: 0
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(GitHubError::Unauthorized)
        } else {
            Err(GitHubError::Api { status, message })
        }
    }

    /// GET a JSON resource with the standard GitHub headers
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");

        let mut request = self
            .agent
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request.call().map_err(GitHubError::Http)?;
        let mut response = self.check_response(response)?;
        let value: T = response.body_mut().read_json()?;
        Ok(value)
    }

    // ==================== Repository Operations ====================

    /// List one page of repositories owned by an organization
    pub fn list_org_repos(&self, org: &str, per_page: usize, page: usize) -> Result<Vec<GitHubRepo>> {
        let url = format!(
            "{}/orgs/{}/repos?per_page={}&page={}",
            self.base_url,
            urlencoding::encode(org),
            per_page,
            page
        );

        self.get_json(&url).map_err(|e| match e {
            GitHubError::Api { status: 404, .. } => GitHubError::OrganizationNotFound(org.to_string()),
            other => other,
        })
    }

    // ==================== Pull Request Operations ====================

    /// List one page of open pull requests in a repository
    pub fn list_open_pulls(
        &self,
        owner: &str,
        repo: &str,
        per_page: usize,
        page: usize,
    ) -> Result<Vec<GitHubPull>> {
        let url = format!(
            "{}/repos/{}/{}/pulls?state=open&per_page={}&page={}",
            self.base_url,
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            per_page,
            page
        );

        self.get_json(&url)
    }
}
