use report_core::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid timestamp '{0}'")]
    InvalidDate(String),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for ReportError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => ReportError::Http(e.to_string()),
            GitHubError::Parse(e) => ReportError::Parse(e.to_string()),
            GitHubError::InvalidDate(value) => {
                ReportError::Parse(format!("Invalid GitHub timestamp '{}'", value))
            }
            GitHubError::OrganizationNotFound(org) => ReportError::OrganizationNotFound(org),
            GitHubError::Unauthorized => ReportError::Unauthorized,
            GitHubError::RateLimited => ReportError::Api {
                status: 429,
                message: "GitHub API rate limit exceeded".to_string(),
            },
            GitHubError::Api { status, message } => ReportError::Api { status, message },
        }
    }
}
