use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::provider::FixtureProvider;
use crate::models::{Match, MatchRecord, Player, PlayerRecord};

/// Fixture provider backed by the dashboard's REST API
/// (`GET {base}/matches`, `GET {base}/players`).
pub struct RestApi {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl RestApi {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let mut base_url = Url::parse(base_url).context("Invalid API base URL")?;
        // Url::join drops the last path segment unless it ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(RestApi {
            http,
            base_url,
            token,
        })
    }

    fn endpoint(&self, resource: &str) -> Result<Url> {
        self.base_url
            .join(resource)
            .with_context(|| format!("Failed to build URL for '{}'", resource))
    }

    async fn get_json(&self, resource: &str) -> Result<Value> {
        let url = self.endpoint(resource)?;
        debug!("Fetching {}", url);

        let mut req = self.http.get(url.clone());
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("API error {} from {}: {}", status, url, body);
        }

        resp.json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

#[async_trait]
impl FixtureProvider for RestApi {
    fn name(&self) -> &str {
        self.base_url.as_str()
    }

    async fn fetch_matches(&self) -> Result<Vec<Match>> {
        let raw = self.get_json("matches").await?;
        Ok(parse_matches_response(&raw))
    }

    async fn fetch_players(&self) -> Result<Vec<Player>> {
        let raw = self.get_json("players").await?;
        Ok(parse_players_response(&raw))
    }
}

/// Responses are either a bare array or `{ "data": [...] }`.
fn items(raw: &Value) -> &[Value] {
    raw.as_array()
        .or_else(|| raw["data"].as_array())
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn parse_matches_response(raw: &Value) -> Vec<Match> {
    items(raw)
        .iter()
        .filter_map(|item| match serde_json::from_value::<MatchRecord>(item.clone()) {
            Ok(record) => {
                let (m, error) = Match::from_record(record);
                if let Some(e) = error {
                    warn!(
                        "Discarding score for match {}: {}",
                        m.id.as_deref().unwrap_or("<no id>"),
                        e
                    );
                }
                Some(m)
            }
            Err(e) => {
                warn!("Skipping malformed match record: {}", e);
                None
            }
        })
        .collect()
}

pub fn parse_players_response(raw: &Value) -> Vec<Player> {
    items(raw)
        .iter()
        .filter_map(|item| match serde_json::from_value::<PlayerRecord>(item.clone()) {
            Ok(record) => Some(Player::from(record)),
            Err(e) => {
                warn!("Skipping malformed player record: {}", e);
                None
            }
        })
        .collect()
}
