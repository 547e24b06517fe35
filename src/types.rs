use serde::{Deserialize, Serialize};

/// Body returned by `GET /{owner}/{repo}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarsResponse {
    pub stars: u64,
}

// GitHub API error body, e.g. `{"message": "Not Found", "documentation_url": "..."}`
#[derive(Debug, Default, Deserialize)]
pub struct GitHubErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
