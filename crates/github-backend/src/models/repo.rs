use serde::{Deserialize, Serialize};

/// GitHub user (minimal representation)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubUser {
    pub login: String,
}

/// Repository as listed under an organization
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepo {
    pub name: String,
}
