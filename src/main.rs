//! Git History - commit timeline across every public repository of one
//! GitHub account.
//!
//! # Usage
//! ```bash
//! git-history                              # develop-suda on 0.0.0.0:8080
//! git-history --account octocat --port 3000
//! LOG_LEVEL=debug git-history --no-log-file # console only
//! ```

mod config;
mod error;
mod github;
mod logging;
mod models;
mod routes;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::{Config, DEFAULT_ACCOUNT, DEFAULT_API_BASE, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use github::{GitHubClient, HistoryAggregator};

/// Git History - serve the aggregated commit history of a GitHub account
#[derive(Parser, Debug)]
#[command(name = "git-history")]
#[command(about = "Aggregated commit history across a GitHub account's public repositories", long_about = None)]
struct Cli {
    /// GitHub account whose public repositories are aggregated
    #[arg(short, long, env = "GIT_HISTORY_ACCOUNT", default_value = DEFAULT_ACCOUNT)]
    account: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GIT_HISTORY_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Address to bind to
    #[arg(long, env = "GIT_HISTORY_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Timeout for each upstream request, in seconds
    #[arg(long, env = "GIT_HISTORY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Maximum number of repositories whose commits are fetched at once
    #[arg(long, env = "GIT_HISTORY_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Also write logs to DIR/YYYYMM/YYYYMMDD/app.log
    #[arg(long, env = "GIT_HISTORY_LOG_DIR", value_name = "DIR", default_value = "log")]
    log_dir: PathBuf,

    /// Log to the console only
    #[arg(long)]
    no_log_file: bool,
}

impl Cli {
    fn log_dir(&self) -> Option<&Path> {
        (!self.no_log_file).then_some(self.log_dir.as_path())
    }

    fn config(&self) -> Config {
        Config::new(&self.account, &self.api_base)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_concurrency(self.concurrency)
    }
}

fn app(config: Arc<Config>) -> anyhow::Result<Router> {
    let client = GitHubClient::new(Arc::clone(&config)).context("failed to build HTTP client")?;
    let history = Arc::new(HistoryAggregator::new(config, client));

    // Frontend may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(routes::create_router(history)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_dir())?;
    tracing::info!("Starting application initialization");

    let config = Arc::new(cli.config());
    tracing::info!(
        account = %config.account,
        api_base = %config.api_base,
        timeout_secs = config.request_timeout.as_secs(),
        concurrency = config.max_concurrency,
        "Configuration loaded"
    );

    let app = app(config)?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!(%addr, "Server starting");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
