use crate::cli::Cli;
use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use report_core::{ReportOptions, SortKey, DEFAULT_STALE_AFTER_DAYS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the credential file in the home directory
pub const CREDENTIALS_FILE_NAME: &str = ".jenkins-ci.org";

/// Report and publishing configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// GitHub organization whose repositories are scanned
    pub organization: String,
    pub github_url: String,
    pub github_token: Option<String>,
    /// Wiki root URL
    pub wiki_url: String,
    /// Space key of the target page
    pub wiki_space: String,
    /// Title of the target page
    pub wiki_page: String,
    /// Credential file, defaults to `~/.jenkins-ci.org`
    pub credentials_file: Option<PathBuf>,
    pub sort_by: SortKey,
    pub stale_after_days: i64,
    pub group_by_repository: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization: "jenkinsci".to_string(),
            github_url: "https://api.github.com".to_string(),
            github_token: None,
            wiki_url: "https://wiki.jenkins-ci.org".to_string(),
            wiki_space: "JENKINS".to_string(),
            wiki_page: "Pending Pull Requests".to_string(),
            credentials_file: None,
            sort_by: SortKey::Created,
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
            group_by_repository: true,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("PENDING_PRS_").ignore(&["config"]));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(org) = &cli.org {
            self.organization = org.clone();
        }
        if let Some(token) = &cli.github_token {
            self.github_token = Some(token.clone());
        }
        if let Some(sort) = cli.sort {
            self.sort_by = sort.into();
        }
        if cli.no_summary {
            self.group_by_repository = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.organization.trim().is_empty() {
            return Err(anyhow!(
                "Organization not configured. Set via --org, PENDING_PRS_ORGANIZATION env var, or config file"
            ));
        }
        if self.stale_after_days < 0 {
            return Err(anyhow!(
                "stale_after_days must not be negative (got {})",
                self.stale_after_days
            ));
        }
        Ok(())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            organization: self.organization.clone(),
            sort_by: self.sort_by,
            stale_after_days: self.stale_after_days,
            group_by_repository: self.group_by_repository,
        }
    }

    /// Configured credential file, or the default one in the home directory
    pub fn credentials_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.credentials_file {
            return Ok(path.clone());
        }

        BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(CREDENTIALS_FILE_NAME))
            .ok_or_else(|| anyhow!("Could not determine home directory"))
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pending-prs").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("pending-prs").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("pending-prs")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("pending-prs.toml"))
}
