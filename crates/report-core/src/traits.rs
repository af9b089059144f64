use crate::error::Result;
use crate::models::PullRequest;

/// Source of open pull requests (GitHub, or a fake in tests)
pub trait PullRequestSource {
    /// Fetch every open pull request in every repository owned by `organization`
    fn fetch_open_pull_requests(&self, organization: &str) -> Result<Vec<PullRequest>>;
}

/// Destination wiki for the rendered report
///
/// Implementations authenticate, look up the page by space and title, replace its
/// content wholesale and store it back. There is no partial update: the page either
/// keeps its previous content or receives `content` in full.
pub trait PagePublisher {
    fn publish_page(&self, space: &str, title: &str, content: &str) -> Result<()>;
}
