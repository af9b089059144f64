use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of days after which a pull request is highlighted
pub const DEFAULT_STALE_AFTER_DAYS: i64 = 14;

/// Open pull request as seen by the report, independent of the hosting backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Name of the repository (without the owner prefix)
    pub repository: String,
    /// Login of the author, if the account still exists
    pub author: Option<String>,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last update timestamp
    pub updated: DateTime<Utc>,
    pub title: String,
    /// Browser URL of the pull request
    pub url: String,
}

impl PullRequest {
    /// Timestamp selected by the given sort key
    pub fn timestamp(&self, key: SortKey) -> DateTime<Utc> {
        match key {
            SortKey::Created => self.created,
            SortKey::Updated => self.updated,
        }
    }

    /// Author login, or "-" for deleted/ghost accounts
    pub fn author_or_dash(&self) -> &str {
        self.author.as_deref().unwrap_or("-")
    }
}

/// Number of open pull requests in one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub name: String,
    pub count: usize,
}

/// Which timestamp drives both ordering and staleness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Oldest created first
    #[default]
    Created,
    /// Least recently updated first
    Updated,
}

/// Shape of the rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Organization owning the repositories, used for repository links
    pub organization: String,
    pub sort_by: SortKey,
    /// Rows older than this many whole days are highlighted
    pub stale_after_days: i64,
    /// Emit the per-repository count section before the flat list
    pub group_by_repository: bool,
}

impl ReportOptions {
    pub fn new(organization: &str) -> Self {
        Self {
            organization: organization.to_string(),
            sort_by: SortKey::default(),
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
            group_by_repository: true,
        }
    }
}

/// Wiki login, held only for the duration of the publish call
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
