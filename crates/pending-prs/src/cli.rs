use clap::{Parser, ValueEnum};
use report_core::SortKey;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pending-prs",
    version,
    about = "Publish the open pull requests of a GitHub organization to a wiki page"
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "PENDING_PRS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub organization to report on (overrides config file)
    #[arg(long, value_name = "ORG")]
    pub org: Option<String>,

    /// GitHub API token (overrides config file)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Timestamp used for ordering and highlighting
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Leave out the per-repository summary table
    #[arg(long)]
    pub no_summary: bool,

    /// Print the report without publishing it
    #[arg(long)]
    pub dry_run: bool,

    /// When to colorize error output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum SortArg {
    /// Oldest created first
    Created,
    /// Least recently updated first
    Updated,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Created => SortKey::Created,
            SortArg::Updated => SortKey::Updated,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stderr is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}
