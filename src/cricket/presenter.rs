use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use super::samples::fallback_matches;
use super::scorecard::format_score;
use super::status::{KeywordClassifier, StatusClassifier};
use super::win_probability::estimate;
use crate::models::{Match, MatchCard, MatchStatusCategory, WinProbability};

/// Category filter chosen by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFilter {
    #[default]
    All,
    Live,
    Upcoming,
    Completed,
}

impl MatchFilter {
    pub fn admits(&self, category: MatchStatusCategory) -> bool {
        match self {
            MatchFilter::All => true,
            MatchFilter::Live => category == MatchStatusCategory::Live,
            MatchFilter::Upcoming => category == MatchStatusCategory::Upcoming,
            MatchFilter::Completed => category == MatchStatusCategory::Completed,
        }
    }
}

/// Turns validated matches into match cards.
///
/// Each step is optional: a match with no score or no estimable chase still
/// produces a card, just without those fields.
#[derive(Clone)]
pub struct MatchPresenter {
    classifier: Arc<dyn StatusClassifier>,
}

impl Default for MatchPresenter {
    fn default() -> Self {
        MatchPresenter::new(Arc::new(KeywordClassifier))
    }
}

impl MatchPresenter {
    pub fn new(classifier: Arc<dyn StatusClassifier>) -> Self {
        MatchPresenter { classifier }
    }

    pub fn category(&self, m: &Match) -> MatchStatusCategory {
        self.classifier.classify(m.status.as_deref())
    }

    pub fn present(&self, m: &Match) -> MatchCard {
        let category = self.category(m);

        // Only a live chase gets a probability
        let win_probability = match category {
            MatchStatusCategory::Live => {
                estimate(&m.score, m.match_type.as_deref().unwrap_or_default())
            }
            _ => None,
        };
        let win_probability_text = win_probability.map(|p| win_probability_text(m, p));

        MatchCard {
            id: m.id.clone(),
            title: match_title(m),
            venue: m.venue.clone(),
            start_time_text: start_time_text(m.start_time.as_deref()),
            category,
            status_label: non_empty(m.status.as_deref())
                .unwrap_or(category.as_str())
                .to_string(),
            score_text: format_score(&m.score),
            result: non_empty(m.result.as_deref()).map(str::to_string),
            note: non_empty(m.note.as_deref()).map(str::to_string),
            format: non_empty(m.match_type.as_deref()).map(str::to_uppercase),
            win_probability,
            win_probability_text,
        }
    }

    /// Cards ordered by start time (earliest first) and narrowed by `filter`.
    pub fn present_all(&self, matches: &[Match], filter: MatchFilter) -> Vec<MatchCard> {
        let mut ordered: Vec<&Match> = matches.iter().collect();
        // Stable, so equal start times keep collaborator order
        ordered.sort_by_key(|m| start_timestamp(m.start_time.as_deref()));

        ordered
            .into_iter()
            .filter(|m| filter.admits(self.category(m)))
            .map(|m| self.present(m))
            .collect()
    }

    /// The first `limit` matches in collaborator order. An empty list shows
    /// the built-in sample fixtures instead.
    pub fn featured(&self, matches: &[Match], limit: usize) -> Vec<MatchCard> {
        if matches.is_empty() {
            return fallback_matches()
                .iter()
                .take(limit)
                .map(|m| self.present(m))
                .collect();
        }
        matches.iter().take(limit).map(|m| self.present(m)).collect()
    }
}

// ── Display helpers ──────────────────────────────────────────────────────────

/// `teams` joined with " vs ", then the legacy `teamA`/`teamB` pair, then the
/// match name.
pub fn match_title(m: &Match) -> String {
    if !m.teams.is_empty() {
        return m.teams.join(" vs ");
    }
    let a = non_empty(m.team_a.as_deref());
    let b = non_empty(m.team_b.as_deref());
    if a.is_some() || b.is_some() {
        return format!("{} vs {}", a.unwrap_or("TBD"), b.unwrap_or("TBD"));
    }
    non_empty(m.name.as_deref()).unwrap_or("Match").to_string()
}

/// e.g. "Thu, Dec 26, 07:30" (UTC). Unparseable text is shown as-is.
pub fn start_time_text(value: Option<&str>) -> String {
    let Some(raw) = non_empty(value) else {
        return "TBD".to_string();
    };
    match parse_start(raw) {
        Some(StartTime::Instant(dt)) => dt.format("%a, %b %-d, %H:%M").to_string(),
        Some(StartTime::Day(d)) => d.format("%a, %b %-d").to_string(),
        None => raw.to_string(),
    }
}

/// Milliseconds since the epoch; missing or unparseable values sort as 0.
pub fn start_timestamp(value: Option<&str>) -> i64 {
    match non_empty(value).and_then(parse_start) {
        Some(StartTime::Instant(dt)) => dt.timestamp_millis(),
        Some(StartTime::Day(d)) => d
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0),
        None => 0,
    }
}

fn win_probability_text(m: &Match, p: WinProbability) -> String {
    let chasing = non_empty(m.team_b.as_deref())
        .or_else(|| m.teams.get(1).map(String::as_str))
        .unwrap_or("Chasing");
    let defending = non_empty(m.team_a.as_deref())
        .or_else(|| m.teams.first().map(String::as_str))
        .unwrap_or("Defending");
    format!(
        "{} {}% – {} {}%",
        chasing, p.batting_win, defending, p.bowling_win
    )
}

enum StartTime {
    Instant(DateTime<Utc>),
    Day(NaiveDate),
}

fn parse_start(raw: &str) -> Option<StartTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(StartTime::Instant(dt.with_timezone(&Utc)));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(StartTime::Instant(dt.and_utc()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(StartTime::Day)
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
