pub mod aggregate;
pub mod error;
pub mod models;
pub mod pagination;
pub mod pipeline;
pub mod render;
pub mod traits;

pub use aggregate::{group_by_repository, is_stale, sort_pull_requests};
pub use error::{ReportError, Result};
pub use models::*;
pub use pagination::{fetch_all_pages, DEFAULT_PAGE_SIZE};
pub use pipeline::{generate_report, publish_report};
pub use render::{escape_title, highlight, render_report, ReportTemplates};
pub use traits::{PagePublisher, PullRequestSource};
