//! Wiki table markup for the report

use chrono::{DateTime, Utc};

use crate::aggregate::{days_between, group_by_repository, is_stale};
use crate::models::{PullRequest, ReportOptions, RepositorySummary};

/// Static text placed in front of each table
#[derive(Debug, Clone, Copy)]
pub struct ReportTemplates<'a> {
    /// Precedes the per-repository count table
    pub by_repository: &'a str,
    /// Precedes the flat pull request table
    pub unattended: &'a str,
}

/// Backslash-escape brackets so the title cannot break `[text|url]` link syntax
pub fn escape_title(title: &str) -> String {
    title.replace('[', "\\[").replace(']', "\\]")
}

/// Wrap a cell in red bold markup when it belongs to a stale row
pub fn highlight(cell: &str, stale: bool) -> String {
    if stale {
        format!("{{color:red}}*{}*{{color}}", cell)
    } else {
        cell.to_string()
    }
}

/// Render the full report in the order the pull requests are given
pub fn render_report(
    prs: &[PullRequest],
    options: &ReportOptions,
    now: DateTime<Utc>,
    templates: &ReportTemplates<'_>,
) -> String {
    let mut page = String::new();

    if options.group_by_repository {
        push_template(&mut page, templates.by_repository);
        for summary in group_by_repository(prs) {
            page.push_str(&repository_row(&summary, &options.organization));
        }
    }

    push_template(&mut page, templates.unattended);
    for pr in prs {
        page.push_str(&pull_request_row(pr, options, now));
    }

    page
}

fn push_template(page: &mut String, template: &str) {
    page.push_str(template);
    if !template.is_empty() && !template.ends_with('\n') {
        page.push('\n');
    }
}

fn repository_row(summary: &RepositorySummary, organization: &str) -> String {
    let link = format!(
        "[{name}|https://github.com/{org}/{name}/pulls]",
        name = summary.name,
        org = organization
    );
    format!("|{:>60}|{:>4}|\n", link, summary.count)
}

fn pull_request_row(pr: &PullRequest, options: &ReportOptions, now: DateTime<Utc>) -> String {
    let stale = is_stale(pr, now, options);
    let days_since_creation = days_between(now, pr.created).to_string();
    let days_since_update = days_between(now, pr.updated).to_string();
    let link = format!("[{}|{}]", escape_title(&pr.title), pr.url);

    format!(
        "|{:>30}|{:>20}|{:>5}|{:>5}|{}\n",
        highlight(&pr.repository, stale),
        highlight(pr.author_or_dash(), stale),
        highlight(&days_since_creation, stale),
        highlight(&days_since_update, stale),
        highlight(&link, stale),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    const TEMPLATES: ReportTemplates<'static> = ReportTemplates {
        by_repository: "h2. By repository\n||Repository||Count||\n",
        unattended: "h2. Unattended\n||Repository||Author||Age||Idle||Title||\n",
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn pr(repo: &str, title: &str, created_days_ago: i64) -> PullRequest {
        PullRequest {
            repository: repo.to_string(),
            author: Some("dev".to_string()),
            created: now() - Duration::days(created_days_ago),
            updated: now() - Duration::days(1),
            title: title.to_string(),
            url: format!("https://github.com/jenkinsci/{}/pull/7", repo),
        }
    }

    fn detail_rows(report: &str) -> Vec<&str> {
        report
            .lines()
            .filter(|l| l.starts_with('|') && l.contains("/pull/"))
            .collect()
    }

    #[test]
    fn escape_title_brackets() {
        assert_eq!(escape_title("[Foo] bar"), "\\[Foo\\] bar");
        assert_eq!(escape_title("plain"), "plain");
    }

    #[test]
    fn highlight_wraps_only_stale_cells() {
        assert_eq!(highlight("core", true), "{color:red}*core*{color}");
        assert_eq!(highlight("core", false), "core");
    }

    #[test]
    fn fresh_row_layout() {
        let options = ReportOptions::new("jenkinsci");
        let row = pull_request_row(&pr("core", "Fix NPE", 3), &options, now());

        assert_eq!(
            row,
            format!(
                "|{:>30}|{:>20}|{:>5}|{:>5}|[Fix NPE|https://github.com/jenkinsci/core/pull/7]\n",
                "core", "dev", "3", "1"
            )
        );
    }

    #[test]
    fn stale_row_is_highlighted_in_every_cell() {
        let options = ReportOptions::new("jenkinsci");
        let row = pull_request_row(&pr("core", "Old", 15), &options, now());

        assert_eq!(row.matches("{color:red}*").count(), 5);
        assert!(row.contains("{color:red}*15*{color}"));
    }

    #[test]
    fn fourteen_days_is_not_stale() {
        let options = ReportOptions::new("jenkinsci");
        let row = pull_request_row(&pr("core", "Borderline", 14), &options, now());

        assert!(!row.contains("{color:red}"));
    }

    #[test]
    fn missing_author_renders_dash() {
        let options = ReportOptions::new("jenkinsci");
        let mut ghost = pr("core", "Orphan", 1);
        ghost.author = None;

        let row = pull_request_row(&ghost, &options, now());

        assert!(row.contains(&format!("|{:>20}|", "-")));
    }

    #[test]
    fn title_brackets_escaped_in_link() {
        let options = ReportOptions::new("jenkinsci");
        let row = pull_request_row(&pr("core", "[JENKINS-1] Fix", 1), &options, now());

        assert!(row.contains("[\\[JENKINS-1\\] Fix|https://github.com/jenkinsci/core/pull/7]"));
    }

    #[test]
    fn repository_row_links_to_pull_list() {
        let row = repository_row(
            &RepositorySummary { name: "core".to_string(), count: 12 },
            "jenkinsci",
        );

        let link = "[core|https://github.com/jenkinsci/core/pulls]";
        assert_eq!(row, format!("|{:>60}|  12|\n", link));
    }

    #[test]
    fn report_starts_with_preambles() {
        let options = ReportOptions::new("jenkinsci");
        let report = render_report(&[pr("core", "A", 1)], &options, now(), &TEMPLATES);

        assert!(report.starts_with(TEMPLATES.by_repository));
        let unattended_at = report.find(TEMPLATES.unattended).unwrap();
        let first_detail = report.find("[A|").unwrap();
        assert!(unattended_at < first_detail);
    }

    #[test]
    fn summary_section_can_be_omitted() {
        let mut options = ReportOptions::new("jenkinsci");
        options.group_by_repository = false;

        let report = render_report(&[pr("core", "A", 1)], &options, now(), &TEMPLATES);

        assert!(report.starts_with(TEMPLATES.unattended));
        assert!(!report.contains("/pulls]"));
    }

    #[test]
    fn template_without_newline_is_terminated() {
        let options = ReportOptions::new("jenkinsci");
        let templates = ReportTemplates {
            by_repository: "",
            unattended: "h2. Open",
        };

        let report = render_report(&[], &options, now(), &templates);

        assert_eq!(report, "h2. Open\n");
    }

    #[test]
    fn rows_follow_input_order() {
        let options = ReportOptions::new("jenkinsci");
        let prs = vec![pr("b", "second", 5), pr("a", "first", 2)];

        let report = render_report(&prs, &options, now(), &TEMPLATES);
        let rows = detail_rows(&report);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("[second|"));
        assert!(rows[1].contains("[first|"));
    }
}
