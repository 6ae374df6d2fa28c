use clap::Parser;
use std::net::SocketAddr;
use url::Url;

/// Cricket match dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "cricket-dashboard", version, about)]
pub struct Config {
    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub dashboard_addr: String,

    /// Base URL of the match and player REST API
    #[arg(
        long,
        env = "CRICKET_API_URL",
        default_value = "http://localhost:5000/api"
    )]
    pub api_url: String,

    /// Bearer token forwarded to the REST API
    #[arg(long, env = "CRICKET_API_TOKEN")]
    pub api_token: Option<String>,

    /// Fixture refresh interval in seconds
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value = "30")]
    pub poll_interval_secs: u64,

    /// Per-request timeout against the REST API in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,

    /// Number of matches shown in the featured strip
    #[arg(long, env = "FEATURED_LIMIT", default_value = "4")]
    pub featured_limit: usize,

    /// Number of players in each leaderboard
    #[arg(long, env = "LEADERBOARD_SIZE", default_value = "15")]
    pub leaderboard_size: usize,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("api_url '{}' is not a valid URL: {}", self.api_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api_url must use http or https, got '{}'", url.scheme());
        }
        if self.dashboard_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("dashboard_addr '{}' is not a socket address", self.dashboard_addr);
        }
        if self.poll_interval_secs == 0 {
            anyhow::bail!("poll_interval_secs must be positive");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be positive");
        }
        if self.featured_limit == 0 {
            anyhow::bail!("featured_limit must be positive");
        }
        if self.leaderboard_size == 0 {
            anyhow::bail!("leaderboard_size must be positive");
        }
        Ok(())
    }
}
