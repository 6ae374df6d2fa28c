//! Match status bucketing.
//!
//! Status text from the match-data API is free-form ("India won by 6 wkts",
//! "Stumps - Day 2", "Match starts at 14:00 GMT"), so the category is picked
//! by substring keywords. The keyword lists and their order are load-bearing:
//! completed markers are checked before live markers, which are checked
//! before upcoming markers, and anything unrecognised is shown as live.

use crate::models::MatchStatusCategory;

const COMPLETED_MARKERS: [&str; 6] = ["won", "lost", "abandon", "no result", "draw", "tie"];

const LIVE_MARKERS: [&str; 8] = [
    "live", "stumps", "lunch", "tea", "session", "trail", "lead", "innings",
];

const UPCOMING_MARKERS: [&str; 4] = ["scheduled", "upcoming", "start", "match not started"];

/// Maps a status string to a badge category.
pub trait StatusClassifier: Send + Sync {
    fn classify(&self, status_text: Option<&str>) -> MatchStatusCategory;
}

/// Substring-keyword classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl StatusClassifier for KeywordClassifier {
    fn classify(&self, status_text: Option<&str>) -> MatchStatusCategory {
        classify_status(status_text)
    }
}

/// Missing or empty text is `Upcoming`; unrecognised text is `Live`.
pub fn classify_status(status_text: Option<&str>) -> MatchStatusCategory {
    let s = status_text.unwrap_or_default().to_lowercase();
    if s.is_empty() {
        return MatchStatusCategory::Upcoming;
    }

    let has_any = |markers: &[&str]| markers.iter().any(|m| s.contains(m));

    if has_any(&COMPLETED_MARKERS[..]) {
        MatchStatusCategory::Completed
    } else if has_any(&LIVE_MARKERS[..]) {
        MatchStatusCategory::Live
    } else if has_any(&UPCOMING_MARKERS[..]) {
        MatchStatusCategory::Upcoming
    } else {
        MatchStatusCategory::Live
    }
}
