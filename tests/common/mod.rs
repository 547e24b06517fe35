#![allow(dead_code)]

use github_stars_api::github::{GitHubClient, GitHubClientConfig};
use std::time::Duration;
use wiremock::MockServer;

pub const LINK_42: &str = r#"<https://api.example.com/repos/o/r/stargazers?per_page=1&page=2>; rel="next", <https://api.example.com/repos/o/r/stargazers?per_page=1&page=42>; rel="last""#;

pub fn client_with(base_url: &str, timeout: Duration, token: Option<&str>) -> GitHubClient {
    GitHubClient::new(GitHubClientConfig {
        base_url: base_url.to_string(),
        token: token.map(str::to_string),
        timeout,
        ..Default::default()
    })
    .expect("Failed to create client")
}

/// Client pointed at the mock server with a generous timeout.
pub fn client_for(server: &MockServer) -> GitHubClient {
    client_with(&server.uri(), Duration::from_secs(5), None)
}

/// A local URL with nothing listening behind it.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
