//! Built-in fixtures and roster shown while the API has nothing to offer.

use crate::models::{Match, Player};

fn fixture(id: &str, teams: [&str; 2], venue: &str, status: &str, note: &str, start: &str, kind: &str) -> Match {
    Match {
        id: Some(id.into()),
        teams: teams.iter().map(|t| t.to_string()).collect(),
        venue: Some(venue.into()),
        status: Some(status.into()),
        note: Some(note.into()),
        start_time: Some(start.into()),
        match_type: Some(kind.into()),
        ..Default::default()
    }
}

/// Featured-strip stand-ins for an empty board.
pub fn fallback_matches() -> Vec<Match> {
    vec![
        fixture(
            "feat-1",
            ["India", "Australia"],
            "Melbourne Cricket Ground",
            "Upcoming • Sample",
            "2nd Test • Boxing Day special",
            "2024-12-26T07:30:00Z",
            "test",
        ),
        fixture(
            "feat-2",
            ["England", "Pakistan"],
            "Lord’s Cricket Ground",
            "Live • Sample",
            "ENG lead by 45 runs",
            "2024-10-15T09:30:00Z",
            "odi",
        ),
        fixture(
            "feat-3",
            ["South Africa", "New Zealand"],
            "Cape Town Stadium",
            "Completed • Sample",
            "SA won by 5 wkts",
            "2024-08-02T11:30:00Z",
            "t20",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn star(
    id: &str,
    name: &str,
    team: &str,
    role: &str,
    runs: f64,
    hundreds: f64,
    fifties: f64,
    average: f64,
    wickets: f64,
    strike_rate: f64,
    economy: Option<f64>,
) -> Player {
    Player {
        id: Some(id.into()),
        name: Some(name.into()),
        team: Some(team.into()),
        role: Some(role.into()),
        runs: Some(runs),
        hundreds: Some(hundreds),
        fifties: Some(fifties),
        batting_average: Some(average),
        wickets: Some(wickets),
        strike_rate: Some(strike_rate),
        economy,
    }
}

/// Evergreen players merged behind the API roster in the spotlight.
pub fn sample_players() -> Vec<Player> {
    vec![
        star("sample-kohli", "Virat Kohli", "India", "Batsman", 13848.0, 50.0, 72.0, 58.2, 5.0, 93.5, Some(6.2)),
        star("sample-root", "Joe Root", "England", "Batsman", 6522.0, 16.0, 39.0, 47.6, 26.0, 86.8, Some(5.8)),
        star("sample-williamson", "Kane Williamson", "New Zealand", "Batsman", 6810.0, 13.0, 45.0, 48.6, 37.0, 81.1, Some(5.4)),
        star("sample-stokes", "Ben Stokes", "England", "All-rounder", 3463.0, 5.0, 24.0, 39.4, 74.0, 95.1, Some(6.0)),
        star("sample-rashid", "Rashid Khan", "Afghanistan", "Bowler", 1322.0, 0.0, 5.0, 19.2, 190.0, 101.5, Some(4.2)),
        star("sample-bumrah", "Jasprit Bumrah", "India", "Bowler", 91.0, 0.0, 0.0, 7.6, 149.0, 57.2, Some(4.6)),
        star("sample-cummins", "Pat Cummins", "Australia", "Bowler", 1021.0, 0.0, 1.0, 17.6, 148.0, 80.1, Some(5.3)),
        star("sample-dekock", "Quinton de Kock", "South Africa", "Wicketkeeper", 6770.0, 21.0, 30.0, 45.7, 0.0, 96.6, None),
    ]
}
