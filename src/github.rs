use crate::error::{Result, StarsError};
use crate::types::{GitHubErrorBody, StarsResponse};
use regex::Regex;
use reqwest::header::{ACCEPT, LINK};
use reqwest::{Client, StatusCode};
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
// One stargazer per page, so the last page number is the star count.
const PER_PAGE: u32 = 1;

/// Settings for building a [`GitHubClient`].
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(10),
            user_agent: format!("github-stars-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub struct GitHubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            StarsError::Internal(format!("invalid GitHub API URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(StarsError::Internal(format!(
                "GitHub API URL cannot be used as a base: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StarsError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(GitHubClient {
            client,
            base_url,
            token: config.token.filter(|t| !t.is_empty()),
        })
    }

    /// Build `<base>/repos/<owner>/<repo>/stargazers?per_page=1`.
    ///
    /// Owner and repo are each pushed as a single path segment, so reserved
    /// characters such as `/` end up percent-encoded.
    pub fn stargazers_url(&self, owner: &str, repo: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                StarsError::Internal(format!(
                    "GitHub API URL cannot be used as a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["repos", owner, repo, "stargazers"]);
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string());
        Ok(url)
    }

    /// Resolve the star count of `owner/repo` with a single stargazers request.
    ///
    /// Dropping the returned future aborts the upstream request.
    pub async fn get_stars(&self, owner: &str, repo: &str) -> Result<StarsResponse> {
        let url = self.stargazers_url(owner, repo)?;

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(StarsError::Unavailable)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(StarsError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_failure(status, &body));
        }

        let link = response
            .headers()
            .get(LINK)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default();

        let stars = parse_star_count(link)?;
        Ok(StarsResponse { stars })
    }
}

fn upstream_failure(status: StatusCode, body: &str) -> StarsError {
    let message = serde_json::from_str::<GitHubErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty());

    match message {
        Some(message) => StarsError::FailedPrecondition(format!("GitHub API error: {}", message)),
        None => StarsError::FailedPrecondition(format!(
            "GitHub API returned status {}",
            status.as_u16()
        )),
    }
}

/// Matches a multi-entry Link header and captures the final `page=<N>`.
fn last_page_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^.+,.+page=(\d+).+$").expect("Link header regex is valid"))
}

/// Extract the star count from a stargazers `Link` header.
///
/// GitHub Link headers look like:
/// `<https://api.github.com/repos/o/r/stargazers?per_page=1&page=2>; rel="next", <...&page=42>; rel="last"`
///
/// A missing header (repositories with zero or one star) is reported the
/// same way as a malformed one.
pub fn parse_star_count(link: &str) -> Result<u64> {
    let page = last_page_regex()
        .captures(link)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            StarsError::Internal("failed to parse Link header for star count".to_string())
        })?;

    page.as_str().parse::<u64>().map_err(|_| {
        StarsError::Internal("failed to parse star count from Link header".to_string())
    })
}
