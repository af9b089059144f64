//! Confluence REST API client

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use report_core::Credentials;
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

use crate::error::{ConfluenceError, Result};
use crate::models::*;

/// Authenticated session returned by `ConfluenceClient::login`
///
/// Holds the Basic auth header derived from the credentials; the credentials
/// themselves are not retained.
#[derive(Clone)]
pub struct WikiSession {
    username: String,
    auth_header: String,
}

impl WikiSession {
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for WikiSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikiSession")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Confluence REST API client
///
/// The base_url is the wiki root (e.g., "https://wiki.jenkins-ci.org"); REST
/// endpoints live under `/rest/api`.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
}

impl ConfluenceClient {
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api{}", self.base_url, path)
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

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Confluence error format: {"statusCode": 404, "message": "..."}
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
            Err(ConfluenceError::Unauthorized)
        } else {
            Err(ConfluenceError::Api { status, message })
        }
    }

    // ==================== Session Operations ====================

    /// Verify the credentials and open a session
    pub fn login(&self, credentials: &Credentials) -> Result<WikiSession> {
        let encoded = STANDARD.encode(format!("{}:{}", credentials.username, credentials.password));
        let session = WikiSession {
            username: credentials.username.clone(),
            auth_header: format!("Basic {}", encoded),
        };

        let url = self.api_url("/user/current");
        debug!(url = %url, username = %credentials.username, "Logging in");

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &session.auth_header)
            .header("Accept", "application/json")
            .call()
            .map_err(ConfluenceError::from)?;

        let mut response = self.check_response(response)?;
        let user: ConfluenceCurrentUser = response.body_mut().read_json()?;
        if user.is_anonymous() {
            return Err(ConfluenceError::Unauthorized);
        }

        Ok(session)
    }

    // ==================== Page Operations ====================

    /// Look up a page by space key and exact title
    pub fn get_page(&self, session: &WikiSession, space: &str, title: &str) -> Result<WikiPage> {
        let url = format!(
            "{}?type=page&spaceKey={}&title={}&expand=body.storage,version,space",
            self.api_url("/content"),
            urlencoding::encode(space),
            urlencoding::encode(title)
        );
        debug!(url = %url, "GET");

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &session.auth_header)
            .header("Accept", "application/json")
            .call()
            .map_err(ConfluenceError::from)?;

        let mut response = self.check_response(response)?;
        let list: ConfluenceContentList = response.body_mut().read_json()?;

        list.results
            .into_iter()
            .next()
            .map(|content| WikiPage::from_content(content, space))
            .ok_or_else(|| ConfluenceError::PageNotFound {
                space: space.to_string(),
                title: title.to_string(),
            })
    }

    /// Store the page as a new version, returning the stored page
    pub fn store_page(&self, session: &WikiSession, page: &WikiPage) -> Result<WikiPage> {
        let url = self.api_url(&format!("/content/{}", page.id));
        debug!(url = %url, version = page.version + 1, "PUT");

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &session.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send_json(page.to_update())
            .map_err(ConfluenceError::from)?;

        let mut response = self.check_response(response)?;
        let stored: ConfluenceContent = response.body_mut().read_json()?;
        Ok(WikiPage::from_content(stored, &page.space))
    }
}
