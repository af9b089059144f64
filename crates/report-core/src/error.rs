use std::path::PathBuf;
use thiserror::Error;

/// Common errors for every stage of the report pipeline
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    #[error("Wiki page not found: {title} in space {space}")]
    PageNotFound { space: String, title: String },

    #[error("You need to have userName and password in {}", path.display())]
    MissingCredentials { path: PathBuf },

    #[error("Credential file {} is missing the '{}' property", path.display(), key)]
    IncompleteCredentials { path: PathBuf, key: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_names_the_path() {
        let err = ReportError::MissingCredentials {
            path: PathBuf::from("/home/alice/.jenkins-ci.org"),
        };
        assert_eq!(
            err.to_string(),
            "You need to have userName and password in /home/alice/.jenkins-ci.org"
        );
    }

    #[test]
    fn page_not_found_mentions_space_and_title() {
        let err = ReportError::PageNotFound {
            space: "JENKINS".to_string(),
            title: "Pending Pull Requests".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("JENKINS"));
        assert!(msg.contains("Pending Pull Requests"));
    }
}
