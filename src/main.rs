use anyhow::Context;
use clap::Parser;
use colored::*;
use github_stars_api::cli::Cli;
use github_stars_api::github::{GitHubClient, GitHubClientConfig};
use github_stars_api::server::{start_server, AppState};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Stars API".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    if cli.github_token.is_none() {
        warn!("GITHUB_TOKEN not set; upstream requests are unauthenticated and heavily rate limited");
    }

    let github = GitHubClient::new(GitHubClientConfig {
        base_url: cli.github_api_url.clone(),
        token: cli.github_token.clone(),
        timeout: Duration::from_secs(cli.request_timeout),
        ..Default::default()
    })
    .context("failed to create GitHub client")?;

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", cli.host, cli.port))?;

    println!("✅ Upstream: {}", cli.github_api_url);
    println!("\nPress Ctrl+C to stop the server\n");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        println!("\n🛑 Shutting down server...");
    };

    start_server(AppState::new(github), addr, shutdown)
        .await
        .context("server error")?;

    info!("Server stopped");
    println!("✅ Server stopped");

    Ok(())
}
