//! Fetch, sort, render and publish, wired against the capability traits

use chrono::{DateTime, Utc};
use tracing::info;

use crate::aggregate::{is_stale, sort_pull_requests};
use crate::error::Result;
use crate::models::ReportOptions;
use crate::render::{render_report, ReportTemplates};
use crate::traits::{PagePublisher, PullRequestSource};

/// Fetch the organization's open pull requests and render the report
pub fn generate_report(
    source: &dyn PullRequestSource,
    options: &ReportOptions,
    now: DateTime<Utc>,
    templates: &ReportTemplates<'_>,
) -> Result<String> {
    let mut prs = source.fetch_open_pull_requests(&options.organization)?;
    sort_pull_requests(&mut prs, options.sort_by);

    let stale = prs.iter().filter(|pr| is_stale(pr, now, options)).count();
    info!(
        organization = %options.organization,
        pull_requests = prs.len(),
        stale,
        "Fetched open pull requests"
    );

    Ok(render_report(&prs, options, now, templates))
}

/// Overwrite the wiki page with the rendered report
pub fn publish_report(
    publisher: &dyn PagePublisher,
    space: &str,
    title: &str,
    content: &str,
) -> Result<()> {
    publisher.publish_page(space, title, content)?;
    info!(space, title, bytes = content.len(), "Published report");
    Ok(())
}
