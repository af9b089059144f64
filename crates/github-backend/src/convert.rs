//! Conversion from GitHub wire models to report-core types

use chrono::{DateTime, Utc};
use report_core::PullRequest;

use crate::error::{GitHubError, Result};
use crate::models::GitHubPull;

/// Convert a GitHub pull request listed under `repository` to the core model
pub fn github_pull_to_core(pull: GitHubPull, repository: &str) -> Result<PullRequest> {
    Ok(PullRequest {
        repository: repository.to_string(),
        author: pull.user.map(|u| u.login),
        created: parse_github_datetime(&pull.created_at)?,
        updated: parse_github_datetime(&pull.updated_at)?,
        title: pull.title,
        url: pull.html_url,
    })
}

/// Parse a GitHub ISO 8601 datetime string
fn parse_github_datetime(dt: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(dt)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| GitHubError::InvalidDate(dt.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GitHubUser;
    use chrono::TimeZone;

    fn pull(user: Option<&str>, created_at: &str) -> GitHubPull {
        GitHubPull {
            title: "Add pipeline step".to_string(),
            html_url: "https://github.com/jenkinsci/core/pull/42".to_string(),
            user: user.map(|login| GitHubUser {
                login: login.to_string(),
            }),
            created_at: created_at.to_string(),
            updated_at: "2024-01-16T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn converts_fields() {
        let pr = github_pull_to_core(pull(Some("octocat"), "2024-01-15T10:30:00Z"), "core").unwrap();

        assert_eq!(pr.repository, "core");
        assert_eq!(pr.author.as_deref(), Some("octocat"));
        assert_eq!(pr.created, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        assert_eq!(pr.updated, Utc.with_ymd_and_hms(2024, 1, 16, 8, 0, 0).unwrap());
        assert_eq!(pr.title, "Add pipeline step");
        assert_eq!(pr.url, "https://github.com/jenkinsci/core/pull/42");
    }

    #[test]
    fn null_user_becomes_no_author() {
        let pr = github_pull_to_core(pull(None, "2024-01-15T10:30:00Z"), "core").unwrap();
        assert!(pr.author.is_none());
    }

    #[test]
    fn offset_timestamps_are_normalized() {
        let pr = github_pull_to_core(pull(None, "2024-01-15T12:30:00+02:00"), "core").unwrap();
        assert_eq!(pr.created, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let err = github_pull_to_core(pull(None, "yesterday"), "core").unwrap_err();
        assert!(matches!(err, GitHubError::InvalidDate(ref v) if v == "yesterday"));
    }
}
