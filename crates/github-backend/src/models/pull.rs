use serde::{Deserialize, Serialize};

use super::repo::GitHubUser;

/// Pull request as returned by `GET /repos/{owner}/{repo}/pulls`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubPull {
    pub title: String,
    /// Browser URL (the `url` field points at the API)
    pub html_url: String,
    /// Null when the author's account has been deleted
    pub user: Option<GitHubUser>,
    pub created_at: String,
    pub updated_at: String,
}
