pub mod provider;
pub mod rest;

pub use provider::FixtureProvider;
pub use rest::RestApi;

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, RwLockReadGuard};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::models::{Match, Player};

/// Latest fixtures and roster pulled from the collaborators.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub matches: Vec<Match>,
    pub players: Vec<Player>,
    /// Time of the last refresh where at least one provider answered
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Board shared between the refresh task and the dashboard handlers.
#[derive(Clone, Default)]
pub struct SharedBoard {
    inner: Arc<RwLock<Board>>,
}

impl SharedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Board> {
        self.inner.read().await
    }

    #[cfg(test)]
    pub async fn replace(&self, board: Board) {
        *self.inner.write().await = board;
    }
}

/// Poll every provider once, concurrently, and merge what came back into the
/// board. Matches and players are handled independently: a side where every
/// provider failed keeps its previous snapshot.
pub async fn refresh(
    providers: &[Arc<dyn FixtureProvider>],
    board: &SharedBoard,
    timeout: Duration,
) {
    let fetches = providers.iter().map(|p| {
        let p = Arc::clone(p);
        async move {
            let (matches, players) = tokio::join!(
                with_timeout(timeout, p.fetch_matches()),
                with_timeout(timeout, p.fetch_players()),
            );
            (p.name().to_string(), matches, players)
        }
    });
    let results = futures_util::future::join_all(fetches).await;

    let mut match_lists = Vec::new();
    let mut player_lists = Vec::new();
    for (name, matches, players) in results {
        match matches {
            Ok(m) => match_lists.push(m),
            Err(e) => warn!("Provider '{}' failed to fetch matches: {}", name, e),
        }
        match players {
            Ok(p) => player_lists.push(p),
            Err(e) => warn!("Provider '{}' failed to fetch players: {}", name, e),
        }
    }

    if match_lists.is_empty() && player_lists.is_empty() {
        warn!("All providers failed; keeping previous snapshot");
        return;
    }

    let mut guard = board.inner.write().await;
    if !match_lists.is_empty() {
        guard.matches = merge_by_id(match_lists, |m| m.id.as_deref());
    }
    if !player_lists.is_empty() {
        guard.players = merge_by_id(player_lists, |p| p.id.as_deref());
    }
    guard.refreshed_at = Some(Utc::now());
    info!(
        "Board refreshed: {} matches, {} players",
        guard.matches.len(),
        guard.players.len()
    );
}

/// Spawns a background task that refreshes the board immediately and then
/// every `poll_interval`.
pub fn start_refresh_task(
    providers: Vec<Arc<dyn FixtureProvider>>,
    board: SharedBoard,
    poll_interval: Duration,
    request_timeout: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
        info!(
            "Refresh task started ({} providers: {:?}, interval={:?})",
            providers.len(),
            names,
            poll_interval
        );

        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            refresh(&providers, &board, request_timeout).await;
        }
    })
}

async fn with_timeout<T>(limit: Duration, fut: impl Future<Output = Result<T>>) -> Result<T> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!("timed out after {:?}", limit)),
    }
}

/// Concatenate lists in provider order, keeping the first record seen for
/// each id. Records without an id are always kept.
fn merge_by_id<T>(lists: Vec<Vec<T>>, id: impl Fn(&T) -> Option<&str>) -> Vec<T> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();
    for item in lists.into_iter().flatten() {
        if let Some(key) = id(&item) {
            if !seen.insert(key.to_string()) {
                continue;
            }
        }
        merged.push(item);
    }
    merged
}
