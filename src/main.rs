use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod config;
mod cricket;
mod dashboard;
mod feed;
mod models;

use config::Config;
use cricket::MatchPresenter;
use dashboard::AppState;
use feed::{start_refresh_task, FixtureProvider, RestApi, SharedBoard};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let request_timeout = Duration::from_secs(config.request_timeout_secs);
    let api = RestApi::new(&config.api_url, config.api_token.clone(), request_timeout)?;
    info!(
        "Fixture API: {} ({})",
        config.api_url,
        if config.api_token.is_some() { "authenticated" } else { "anonymous" }
    );
    let providers: Vec<Arc<dyn FixtureProvider>> = vec![Arc::new(api)];

    // Keep the board fresh in the background; handlers only read it
    let board = SharedBoard::new();
    start_refresh_task(
        providers,
        board.clone(),
        Duration::from_secs(config.poll_interval_secs),
        request_timeout,
    );

    let state = AppState {
        board,
        presenter: MatchPresenter::default(),
        featured_limit: config.featured_limit,
        leaderboard_size: config.leaderboard_size,
    };
    let app = dashboard::router(state);
    let addr: SocketAddr = config.dashboard_addr.parse()?;
    info!("Dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run dashboard server (blocks until shutdown)
    axum::serve(listener, app).await?;

    Ok(())
}
