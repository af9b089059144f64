//! Grouping, ordering and staleness rules for pull requests

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::models::{PullRequest, ReportOptions, RepositorySummary, SortKey};

/// Count pull requests per repository, busiest repository first
///
/// Repositories with equal counts keep alphabetical order.
pub fn group_by_repository(prs: &[PullRequest]) -> Vec<RepositorySummary> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for pr in prs {
        *counts.entry(pr.repository.as_str()).or_default() += 1;
    }

    let mut summaries: Vec<RepositorySummary> = counts
        .into_iter()
        .map(|(name, count)| RepositorySummary {
            name: name.to_string(),
            count,
        })
        .collect();
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

/// Sort oldest first by the selected timestamp
pub fn sort_pull_requests(prs: &mut [PullRequest], key: SortKey) {
    prs.sort_by_key(|pr| pr.timestamp(key));
}

/// Whole days elapsed between `since` and `now`, truncated toward zero
pub fn days_between(now: DateTime<Utc>, since: DateTime<Utc>) -> i64 {
    (now - since).num_days()
}

/// True when the pull request is older than the configured threshold
pub fn is_stale(pr: &PullRequest, now: DateTime<Utc>, options: &ReportOptions) -> bool {
    days_between(now, pr.timestamp(options.sort_by)) > options.stale_after_days
}
