mod cli;
mod color;
mod config;
mod credentials;
mod output;
mod templates;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use cli::Cli;
use config::Config;
use confluence_backend::{ConfluenceClient, ConfluencePublisher};
use github_backend::GitHubClient;
use output::output_error;
use report_core::{generate_report, publish_report};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        output_error(&e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Logs go to stderr so stdout carries only the report
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(&cli);
    config.validate()?;

    let options = config.report_options();
    let github = GitHubClient::with_base_url(&config.github_url, config.github_token.as_deref());

    let report = generate_report(&github, &options, Utc::now(), &templates::TEMPLATES)
        .with_context(|| {
            format!(
                "Failed to fetch pull requests for organization '{}'",
                options.organization
            )
        })?;

    println!("{}", report);

    if cli.dry_run {
        info!("Dry run, wiki page left untouched");
        return Ok(());
    }

    let credentials = credentials::load_credentials(&config.credentials_path()?)?;
    let publisher = ConfluencePublisher::new(ConfluenceClient::new(&config.wiki_url), credentials);

    publish_report(&publisher, &config.wiki_space, &config.wiki_page, &report).with_context(
        || {
            format!(
                "Failed to publish '{}' in space {}",
                config.wiki_page, config.wiki_space
            )
        },
    )?;

    Ok(())
}
