//! Roster summaries and the two-player radar comparison.
//!
//! Missing numeric stats count as zero everywhere except the comparison stat
//! table, which shows them as absent.

use serde::Serialize;
use std::collections::HashSet;
use std::f64::consts::PI;

use super::samples::sample_players;
use crate::models::Player;

/// Players shown in the home-page spotlight.
pub const SPOTLIGHT_SIZE: usize = 6;

/// Smallest radius a radar vertex is drawn at, so empty stats stay visible.
const MIN_SHAPE: f64 = 0.05;

/// Metrics plotted on the radar, in vertex order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Runs,
    Hundreds,
    Fifties,
    BattingAverage,
    Wickets,
    StrikeRate,
}

pub const RADAR_METRICS: [Metric; 6] = [
    Metric::Runs,
    Metric::Hundreds,
    Metric::Fifties,
    Metric::BattingAverage,
    Metric::Wickets,
    Metric::StrikeRate,
];

impl Metric {
    pub fn value(&self, p: &Player) -> Option<f64> {
        match self {
            Metric::Runs => p.runs,
            Metric::Hundreds => p.hundreds,
            Metric::Fifties => p.fifties,
            Metric::BattingAverage => p.batting_average,
            Metric::Wickets => p.wickets,
            Metric::StrikeRate => p.strike_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosterTotals {
    pub runs: f64,
    pub wickets: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub totals: RosterTotals,
    pub top_run_scorers: Vec<Player>,
    pub top_wicket_takers: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub metric: Metric,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub left: Option<Player>,
    pub right: Option<Player>,
    pub left_shape: Vec<f64>,
    pub right_shape: Vec<f64>,
    pub left_points: String,
    pub right_points: String,
    pub table: Vec<StatRow>,
}

// ── Summaries ────────────────────────────────────────────────────────────────

pub fn roster_totals(players: &[Player]) -> RosterTotals {
    players.iter().fold(
        RosterTotals {
            runs: 0.0,
            wickets: 0.0,
        },
        |mut acc, p| {
            acc.runs += p.runs.unwrap_or(0.0);
            acc.wickets += p.wickets.unwrap_or(0.0);
            acc
        },
    )
}

pub fn top_run_scorers(players: &[Player], n: usize) -> Vec<Player> {
    top_by(players, n, |p| p.runs.unwrap_or(0.0))
}

pub fn top_wicket_takers(players: &[Player], n: usize) -> Vec<Player> {
    top_by(players, n, |p| p.wickets.unwrap_or(0.0))
}

pub fn summarize(players: &[Player], n: usize) -> RosterSummary {
    RosterSummary {
        totals: roster_totals(players),
        top_run_scorers: top_run_scorers(players, n),
        top_wicket_takers: top_wicket_takers(players, n),
    }
}

/// Stable descending sort on `key`, first `n`.
fn top_by(players: &[Player], n: usize, key: impl Fn(&Player) -> f64) -> Vec<Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| key(*b).total_cmp(&key(*a)));
    sorted.into_iter().take(n).cloned().collect()
}

/// `"all"` keeps everyone; otherwise case-insensitive match on role.
pub fn filter_by_role<'a>(players: &'a [Player], role: &str) -> Vec<&'a Player> {
    if role.eq_ignore_ascii_case("all") {
        return players.iter().collect();
    }
    let wanted = role.to_lowercase();
    players
        .iter()
        .filter(|p| p.role.as_deref().unwrap_or_default().to_lowercase() == wanted)
        .collect()
}

/// Roster followed by the built-in sample players, deduplicated on the
/// lowercased id (falling back to the name), first `n`. Entries with neither
/// share one empty key, so only the first of them is kept.
pub fn spotlight(players: &[Player], n: usize) -> Vec<Player> {
    let samples = sample_players();
    let mut seen: HashSet<String> = HashSet::new();
    players
        .iter()
        .chain(samples.iter())
        .filter(|p| seen.insert(spotlight_key(p)))
        .take(n)
        .cloned()
        .collect()
}

fn spotlight_key(p: &Player) -> String {
    fn non_empty(s: &Option<String>) -> Option<&str> {
        s.as_deref().filter(|s| !s.is_empty())
    }
    non_empty(&p.id)
        .or_else(|| non_empty(&p.name))
        .unwrap_or_default()
        .to_lowercase()
}

// ── Radar comparison ─────────────────────────────────────────────────────────

/// Compare two players by id. Missing ids fall back to the first and second
/// roster entries; an id not in the roster gives an empty side.
pub fn compare(
    players: &[Player],
    left_id: Option<&str>,
    right_id: Option<&str>,
    radius: f64,
) -> Comparison {
    let find = |id: &str| players.iter().find(|p| p.id.as_deref() == Some(id));
    let left = match left_id {
        Some(id) => find(id),
        None => players.first(),
    };
    let right = match right_id {
        Some(id) => find(id),
        None => players.get(1).or_else(|| players.first()),
    };

    let maxima = metric_maxima(players);
    let left_shape = radar_shape(left, &maxima);
    let right_shape = radar_shape(right, &maxima);

    let table = RADAR_METRICS
        .iter()
        .map(|m| StatRow {
            metric: *m,
            left: left.and_then(|p| m.value(p)),
            right: right.and_then(|p| m.value(p)),
        })
        .collect();

    Comparison {
        left_points: radar_points(&left_shape, radius),
        right_points: radar_points(&right_shape, radius),
        left: left.cloned(),
        right: right.cloned(),
        left_shape,
        right_shape,
        table,
    }
}

/// Per-metric maximum over the whole roster, never below 1.
fn metric_maxima(players: &[Player]) -> [f64; 6] {
    RADAR_METRICS.map(|m| {
        players
            .iter()
            .map(|p| m.value(p).unwrap_or(0.0))
            .fold(1.0, f64::max)
    })
}

fn radar_shape(player: Option<&Player>, maxima: &[f64; 6]) -> Vec<f64> {
    RADAR_METRICS
        .iter()
        .zip(maxima)
        .map(|(m, max)| {
            let v = player.and_then(|p| m.value(p)).unwrap_or(0.0);
            MIN_SHAPE.max(v / max)
        })
        .collect()
}

/// SVG polygon points for a shape inside a `2 * radius` square, first vertex
/// at twelve o'clock.
pub fn radar_points(shape: &[f64], radius: f64) -> String {
    if shape.is_empty() {
        return String::new();
    }
    let step = 2.0 * PI / shape.len() as f64;
    shape
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let angle = step * i as f64 - PI / 2.0;
            let x = radius * r * angle.cos() + radius;
            let y = radius * r * angle.sin() + radius;
            format!("{},{}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
