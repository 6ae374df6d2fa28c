use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Match, Player};

/// Trait that every match-data collaborator must implement.
#[async_trait]
pub trait FixtureProvider: Send + Sync {
    /// Return all fixtures the collaborator currently knows about.
    async fn fetch_matches(&self) -> Result<Vec<Match>>;

    /// Return the full player roster.
    async fn fetch_players(&self) -> Result<Vec<Player>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
