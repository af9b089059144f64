use report_core::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfluenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Page not found: {title} in space {space}")]
    PageNotFound { space: String, title: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ConfluenceError>;

impl From<ConfluenceError> for ReportError {
    fn from(err: ConfluenceError) -> Self {
        match err {
            ConfluenceError::Http(e) => ReportError::Http(e.to_string()),
            ConfluenceError::Parse(e) => ReportError::Parse(e.to_string()),
            ConfluenceError::Unauthorized => ReportError::Unauthorized,
            ConfluenceError::PageNotFound { space, title } => {
                ReportError::PageNotFound { space, title }
            }
            ConfluenceError::Api { status, message } => ReportError::Api { status, message },
        }
    }
}
