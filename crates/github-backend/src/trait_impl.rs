//! Implementation of report-core traits for GitHubClient

use report_core::{
    fetch_all_pages, PullRequest, PullRequestSource, ReportError, Result, DEFAULT_PAGE_SIZE,
};
use tracing::debug;

use crate::client::GitHubClient;
use crate::convert::github_pull_to_core;

impl PullRequestSource for GitHubClient {
    fn fetch_open_pull_requests(&self, organization: &str) -> Result<Vec<PullRequest>> {
        let repos = fetch_all_pages(
            |page, per_page| {
                self.list_org_repos(organization, per_page, page)
                    .map_err(ReportError::from)
            },
            DEFAULT_PAGE_SIZE,
        )?;
        debug!(organization, repositories = repos.len(), "Listed repositories");

        let mut prs = Vec::new();
        for repo in &repos {
            let pulls = fetch_all_pages(
                |page, per_page| {
                    self.list_open_pulls(organization, &repo.name, per_page, page)
                        .map_err(ReportError::from)
                },
                DEFAULT_PAGE_SIZE,
            )?;

            for pull in pulls {
                prs.push(github_pull_to_core(pull, &repo.name)?);
            }
        }

        Ok(prs)
    }
}
