use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

// ── Raw collaborator records ─────────────────────────────────────────────────

/// A match record as returned by the match-data API. Every field is optional
/// and numbers may arrive as strings; nothing here is trusted yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default, rename = "_id", deserialize_with = "lenient_string")]
    pub doc_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub teams: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_a: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_b: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub match_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "lenient_innings")]
    pub score: Vec<RawInnings>,
}

/// One entry of a match record's `score` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInnings {
    #[serde(default, deserialize_with = "lenient_string")]
    pub inning: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub r: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub w: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub o: Option<f64>,
}

/// A player document as returned by the roster API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(default, rename = "_id", deserialize_with = "lenient_string")]
    pub doc_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub runs: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub hundreds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fifties: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub batting_average: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub wickets: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub strike_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub economy: Option<f64>,
}

// ── Validated domain types ───────────────────────────────────────────────────

/// Rejected innings data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("runs must be a non-negative whole number, got {0}")]
    InvalidRuns(f64),
    #[error("wickets must be a whole number between 0 and 10, got {0}")]
    InvalidWickets(f64),
    #[error("overs must be a non-negative number, got {0}")]
    InvalidOvers(f64),
}

/// One batting innings snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InningsScore {
    /// Free text, e.g. "India Inning 1"
    pub inning_label: Option<String>,
    pub runs: Option<u32>,
    /// 0–10
    pub wickets: Option<u8>,
    /// Balls within the over are encoded as tenths: 12.4 is 12 overs and 4 balls.
    pub overs_bowled: Option<f64>,
}

impl TryFrom<RawInnings> for InningsScore {
    type Error = RecordError;

    fn try_from(raw: RawInnings) -> Result<Self, Self::Error> {
        let runs = match raw.r {
            Some(r) if r.is_finite() && r >= 0.0 && r.fract() == 0.0 && r <= u32::MAX as f64 => {
                Some(r as u32)
            }
            Some(r) => return Err(RecordError::InvalidRuns(r)),
            None => None,
        };
        let wickets = match raw.w {
            Some(w) if (0.0..=10.0).contains(&w) && w.fract() == 0.0 => Some(w as u8),
            Some(w) => return Err(RecordError::InvalidWickets(w)),
            None => None,
        };
        let overs_bowled = match raw.o {
            Some(o) if o.is_finite() && o >= 0.0 => Some(o),
            Some(o) => return Err(RecordError::InvalidOvers(o)),
            None => None,
        };
        Ok(InningsScore {
            inning_label: raw.inning,
            runs,
            wickets,
            overs_bowled,
        })
    }
}

/// A match fixture after boundary validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Match {
    pub id: Option<String>,
    pub name: Option<String>,
    pub teams: Vec<String>,
    pub team_a: Option<String>,
    pub team_b: Option<String>,
    pub venue: Option<String>,
    pub status: Option<String>,
    pub match_type: Option<String>,
    /// `startTime`, falling back to `date`
    pub start_time: Option<String>,
    pub result: Option<String>,
    pub note: Option<String>,
    pub score: Vec<InningsScore>,
}

impl Match {
    /// Validate a raw record. A single bad innings discards the whole score
    /// list; the error is handed back so the caller can report it.
    pub fn from_record(record: MatchRecord) -> (Match, Option<RecordError>) {
        let (score, error) = match record
            .score
            .into_iter()
            .map(InningsScore::try_from)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(score) => (score, None),
            Err(e) => (Vec::new(), Some(e)),
        };

        let m = Match {
            id: record.doc_id.or(record.id),
            name: record.name,
            teams: record.teams,
            team_a: record.team_a,
            team_b: record.team_b,
            venue: record.venue,
            status: record.status,
            match_type: record.match_type,
            start_time: record.start_time.or(record.date),
            result: record.result,
            note: record.note,
            score,
        };
        (m, error)
    }
}

/// A roster entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Option<String>,
    pub name: Option<String>,
    pub team: Option<String>,
    pub role: Option<String>,
    pub runs: Option<f64>,
    pub hundreds: Option<f64>,
    pub fifties: Option<f64>,
    pub batting_average: Option<f64>,
    pub wickets: Option<f64>,
    pub strike_rate: Option<f64>,
    pub economy: Option<f64>,
}

impl From<PlayerRecord> for Player {
    fn from(r: PlayerRecord) -> Self {
        Player {
            id: r.doc_id.or(r.id),
            name: r.name,
            team: r.team,
            role: r.role,
            runs: r.runs,
            hundreds: r.hundreds,
            fifties: r.fifties,
            batting_average: r.batting_average,
            wickets: r.wickets,
            strike_rate: r.strike_rate,
            economy: r.economy,
        }
    }
}

// ── Derived / presented types ────────────────────────────────────────────────

/// Badge bucket for a match. Derived from the status text on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatusCategory {
    Live,
    Upcoming,
    Completed,
}

impl MatchStatusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatusCategory::Live => "live",
            MatchStatusCategory::Upcoming => "upcoming",
            MatchStatusCategory::Completed => "completed",
        }
    }
}

/// Chasing and defending side win percentages. Each is rounded on its own,
/// so the pair may sum to 99 or 101 outside the decided cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinProbability {
    pub batting_win: u8,
    pub bowling_win: u8,
}

/// View-ready match card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCard {
    pub id: Option<String>,
    pub title: String,
    pub venue: Option<String>,
    pub start_time_text: String,
    pub category: MatchStatusCategory,
    pub status_label: String,
    pub score_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_probability: Option<WinProbability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_probability_text: Option<String>,
}

// ── Serde helpers ────────────────────────────────────────────────────────────

/// Accepts a JSON number or a numeric string; anything else, including
/// "NaN" and "inf", becomes `None`.
fn lenient_number<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
    .filter(|n: &f64| n.is_finite()))
}

/// Text fields (and document ids) show up as strings or numbers depending on
/// the store; other shapes become `None`.
fn lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

fn lenient_strings<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}

/// A non-array `score` is treated as no score; non-object entries become
/// empty innings so positions in the list are preserved.
fn lenient_innings<'de, D>(d: D) -> Result<Vec<RawInnings>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}
