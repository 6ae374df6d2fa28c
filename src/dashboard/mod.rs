use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::cricket::players::{self, Comparison, RosterSummary};
use crate::cricket::presenter::MatchFilter;
use crate::cricket::MatchPresenter;
use crate::feed::SharedBoard;
use crate::models::{MatchCard, Player};

/// Radar radius used by the embedded page.
const DEFAULT_RADAR_RADIUS: f64 = 110.0;

#[derive(Clone)]
pub struct AppState {
    pub board: SharedBoard,
    pub presenter: MatchPresenter,
    pub featured_limit: usize,
    pub leaderboard_size: usize,
}

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/matches", get(matches_handler))
        .route("/api/matches/featured", get(featured_handler))
        .route("/api/players", get(players_handler))
        .route("/api/players/stats", get(player_stats_handler))
        .route("/api/players/spotlight", get(spotlight_handler))
        .route("/api/players/compare", get(compare_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchesQuery {
    pub filter: Option<MatchFilter>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    pub left: Option<String>,
    pub right: Option<String>,
    pub radius: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub refreshed_at: Option<DateTime<Utc>>,
    pub matches: usize,
    pub players: usize,
}

async fn index_handler() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// GET /api/health
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Health> {
    let board = state.board.read().await;
    Json(Health {
        refreshed_at: board.refreshed_at,
        matches: board.matches.len(),
        players: board.players.len(),
    })
}

/// GET /api/matches?filter=live
async fn matches_handler(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MatchesQuery>,
) -> Json<Vec<MatchCard>> {
    let board = state.board.read().await;
    let cards = state
        .presenter
        .present_all(&board.matches, q.filter.unwrap_or_default());
    Json(cards)
}

/// GET /api/matches/featured
async fn featured_handler(State(state): State<Arc<AppState>>) -> Json<Vec<MatchCard>> {
    let board = state.board.read().await;
    Json(state.presenter.featured(&board.matches, state.featured_limit))
}

/// GET /api/players?role=Bowler
async fn players_handler(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RoleQuery>,
) -> Json<Vec<Player>> {
    let board = state.board.read().await;
    let role = q.role.as_deref().unwrap_or("all");
    Json(
        players::filter_by_role(&board.players, role)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/players/stats
async fn player_stats_handler(State(state): State<Arc<AppState>>) -> Json<RosterSummary> {
    let board = state.board.read().await;
    Json(players::summarize(&board.players, state.leaderboard_size))
}

/// GET /api/players/spotlight
async fn spotlight_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Player>> {
    let board = state.board.read().await;
    Json(players::spotlight(&board.players, players::SPOTLIGHT_SIZE))
}

/// GET /api/players/compare?left=<id>&right=<id>&radius=110
async fn compare_handler(
    State(state): State<Arc<AppState>>,
    Query(q): Query<CompareQuery>,
) -> Result<Json<Comparison>, (StatusCode, String)> {
    let radius = q.radius.unwrap_or(DEFAULT_RADAR_RADIUS);
    if !radius.is_finite() || radius <= 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("radius must be a positive number, got {}", radius),
        ));
    }
    let board = state.board.read().await;
    Ok(Json(players::compare(
        &board.players,
        q.left.as_deref(),
        q.right.as_deref(),
        radius,
    )))
}

/// Embedded single-file dashboard (HTML + CSS + JS)
const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Cricket Dashboard</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #22c55e;
    --blue: #3b82f6;
    --red: #f97373;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  main { padding: 1.5rem 2rem; display: grid; gap: 1.5rem; }
  .chips { display: flex; gap: .5rem; }
  .chip { background: var(--card); color: var(--text); border: 1px solid var(--border); border-radius: 999px; padding: .3rem .9rem; cursor: pointer; }
  .chip.active { border-color: var(--accent); color: var(--accent); }
  .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1rem; }
  .card { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.1rem; display: grid; gap: .35rem; }
  .card-title { font-weight: 600; }
  .meta { color: var(--muted); font-size: .85rem; }
  .row { display: flex; justify-content: space-between; align-items: center; }
  .badge { padding: .15rem .55rem; border-radius: 4px; font-size: .72rem; font-weight: 700; text-transform: uppercase; }
  .badge.live { background: var(--accent); color: #000; }
  .badge.completed { background: #4b5563; color: #fff; }
  .badge.upcoming { background: var(--blue); color: #fff; }
  .prob { font-size: .85rem; }
  .error { color: var(--red); }
  svg polygon.left { fill: rgba(34,197,94,0.25); stroke: var(--accent); stroke-width: 2; }
  svg polygon.right { fill: rgba(59,130,246,0.2); stroke: var(--blue); stroke-width: 2; }
</style>
</head>
<body>
<header><h1>🏏 Cricket Dashboard</h1><span class="meta" id="refreshed"></span></header>
<main>
  <section class="grid" id="featured"></section>
  <section>
    <div class="chips" id="chips"></div>
  </section>
  <section class="grid" id="matches"></section>
  <section class="card">
    <div class="card-title">Player comparison</div>
    <svg width="260" height="260" viewBox="0 0 240 240">
      <polygon class="left" id="left-shape"></polygon>
      <polygon class="right" id="right-shape"></polygon>
    </svg>
    <div class="meta" id="compare-names"></div>
  </section>
  <section class="grid" id="spotlight"></section>
</main>
<script>
const FILTERS = ['all', 'live', 'upcoming', 'completed'];
let filter = 'all';

function esc(s) {
  return String(s ?? '').replace(/[&<>"]/g, c => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' }[c]));
}

function renderChips() {
  document.getElementById('chips').innerHTML = FILTERS.map(f =>
    `<button class="chip ${f === filter ? 'active' : ''}" data-f="${f}">${f[0].toUpperCase() + f.slice(1)}</button>`
  ).join('');
  document.querySelectorAll('.chip').forEach(b => b.onclick = () => { filter = b.dataset.f; load(); });
}

function card(m) {
  return `<div class="card">
    <div class="card-title">${esc(m.title)}</div>
    <div class="meta">${esc(m.venue)}</div>
    <div class="row meta"><span>${esc(m.startTimeText)}</span>
      <span class="badge ${m.category}">${esc(m.statusLabel)}</span></div>
    ${m.scoreText ? `<div class="meta">${esc(m.scoreText)}</div>` : ''}
    ${m.result ? `<div class="meta">${esc(m.result)}</div>` : ''}
    ${m.note ? `<div class="meta">${esc(m.note)}</div>` : ''}
    ${m.winProbabilityText ? `<div class="prob">Win Probability: ${esc(m.winProbabilityText)}</div>` : ''}
  </div>`;
}

async function load() {
  renderChips();
  const el = document.getElementById('matches');
  try {
    const res = await fetch(`/api/matches?filter=${filter}`);
    const cards = await res.json();
    el.innerHTML = cards.length ? cards.map(card).join('')
      : '<div class="card"><div class="card-title">No matches yet</div></div>';
  } catch (e) {
    el.innerHTML = '<div class="error">Failed to load matches</div>';
  }
  const health = await fetch('/api/health').then(r => r.json()).catch(() => null);
  if (health && health.refreshedAt) {
    document.getElementById('refreshed').textContent = `Updated ${new Date(health.refreshedAt).toLocaleTimeString()}`;
  }
}

async function loadCompare() {
  const c = await fetch('/api/players/compare').then(r => r.json()).catch(() => null);
  if (!c) return;
  document.getElementById('left-shape').setAttribute('points', c.leftPoints);
  document.getElementById('right-shape').setAttribute('points', c.rightPoints);
  document.getElementById('compare-names').textContent =
    `${c.left?.name ?? 'Select player'} vs ${c.right?.name ?? 'Select player'}`;
}

async function loadFeatured() {
  const cards = await fetch('/api/matches/featured').then(r => r.json()).catch(() => []);
  document.getElementById('featured').innerHTML = cards.map(card).join('');
}

function playerCard(p) {
  return `<div class="card">
    <div class="card-title">${esc(p.name)}</div>
    <div class="meta">${esc(p.team)} • ${esc(p.role || 'Batsman')}</div>
    <div class="meta">Runs: ${p.runs ?? 0} • 100s: ${p.hundreds ?? 0} • 50s: ${p.fifties ?? 0} • Avg: ${p.battingAverage ?? '-'}</div>
    <div class="meta">Wickets: ${p.wickets ?? 0} • SR: ${p.strikeRate ?? '-'} • Econ: ${p.economy ?? '-'}</div>
  </div>`;
}

async function loadSpotlight() {
  const players = await fetch('/api/players/spotlight').then(r => r.json()).catch(() => []);
  document.getElementById('spotlight').innerHTML = players.map(playerCard).join('');
}

load();
loadFeatured();
loadCompare();
loadSpotlight();
setInterval(load, 30000);
</script>
</body>
</html>
"#;
