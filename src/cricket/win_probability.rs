//! Chasing-side win probability for a two-innings limited-overs match.
//!
//! The model is a linear heuristic, not a calibrated one: it compares the
//! current run rate of the side batting second with the rate it needs, adds a
//! per-wicket adjustment anchored at five wickets in hand, and squashes the
//! result into [0.03, 0.97]. Only a reached target or exhausted overs produce
//! 100/0.
//!
//! The constants below must not be tuned: displayed percentages are compared
//! against fixed fixtures.

use crate::cricket::format::MatchFormat;
use crate::models::{InningsScore, WinProbability};

/// Floor for overs used as a divisor. Keeps the first-over run rate finite.
const MIN_OVERS: f64 = 0.1;
/// Added to the required rate before normalising the rate differential.
const REQ_RR_SMOOTHING: f64 = 0.1;
/// Win-fraction shift per wicket in hand relative to the anchor.
const WICKET_WEIGHT: f64 = 0.08;
/// Wickets in hand that count as neutral.
const WICKET_ANCHOR: f64 = 5.0;
/// Scale from advantage to win fraction around 0.5.
const ADVANTAGE_SCALE: f64 = 0.25;

const MIN_CHASE: f64 = 0.03;
const MAX_CHASE: f64 = 0.97;

// ── Public API ───────────────────────────────────────────────────────────────

/// Estimate the chasing side's win percentage from the first two innings.
///
/// Returns `None` when fewer than two innings are present or either lacks a
/// run count; that is the normal state before the chase starts.
pub fn estimate(scores: &[InningsScore], match_type: &str) -> Option<WinProbability> {
    let (first, second) = match scores {
        [first, second, ..] => (first, second),
        _ => return None,
    };
    let first_runs = first.runs?;
    let second_runs = second.runs?;

    let total_overs = MatchFormat::from_match_type(match_type).total_overs();
    let target = i64::from(first_runs) + 1;
    let runs_needed = target - i64::from(second_runs);
    let overs_played = second.overs_bowled.unwrap_or(0.0);
    let overs_remaining = (total_overs - overs_played).max(0.0);

    if runs_needed <= 0 {
        return Some(WinProbability {
            batting_win: 100,
            bowling_win: 0,
        });
    }
    if overs_remaining <= 0.0 {
        return Some(WinProbability {
            batting_win: 0,
            bowling_win: 100,
        });
    }

    let wickets_lost = second.wickets.map(f64::from).unwrap_or(0.0);
    let chasing = chasing_win_fraction(
        f64::from(second_runs),
        overs_played,
        runs_needed as f64,
        overs_remaining,
        10.0 - wickets_lost,
    );

    Some(WinProbability {
        batting_win: to_percent(chasing),
        bowling_win: to_percent(1.0 - chasing),
    })
}

// ── Model ────────────────────────────────────────────────────────────────────

/// General-case win fraction for the chasing side, in [0.03, 0.97].
fn chasing_win_fraction(
    runs: f64,
    overs_played: f64,
    runs_needed: f64,
    overs_remaining: f64,
    wickets_in_hand: f64,
) -> f64 {
    let cur_rr = runs / overs_played.max(MIN_OVERS);
    let req_rr = runs_needed / overs_remaining.max(MIN_OVERS);

    let advantage = (cur_rr - req_rr) / (req_rr + REQ_RR_SMOOTHING)
        + WICKET_WEIGHT * (wickets_in_hand - WICKET_ANCHOR);

    (0.5 + ADVANTAGE_SCALE * advantage).clamp(MIN_CHASE, MAX_CHASE)
}

/// Round half away from zero. Inputs are positive, so this is round-half-up.
fn to_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round() as u8
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inn(r: u32, w: u8, o: f64) -> InningsScore {
        InningsScore {
            inning_label: None,
            runs: Some(r),
            wickets: Some(w),
            overs_bowled: Some(o),
        }
    }

    fn wp(batting_win: u8, bowling_win: u8) -> WinProbability {
        WinProbability {
            batting_win,
            bowling_win,
        }
    }

    // ── Fixture table ────────────────────────────────────────────────────────

    #[test]
    fn target_reached_is_certain_win() {
        let scores = [inn(180, 5, 20.0), inn(181, 3, 15.0)];
        assert_eq!(estimate(&scores, "t20"), Some(wp(100, 0)));
    }

    #[test]
    fn overs_exhausted_is_certain_loss() {
        let scores = [inn(150, 8, 20.0), inn(90, 6, 20.0)];
        assert_eq!(estimate(&scores, "t20"), Some(wp(0, 100)));
    }

    #[test]
    fn odi_mid_chase() {
        let scores = [inn(300, 5, 50.0), inn(150, 2, 25.0)];
        assert_eq!(estimate(&scores, "odi"), Some(wp(56, 44)));
    }

    #[test]
    fn odi_mid_chase_fraction() {
        let f = chasing_win_fraction(150.0, 25.0, 151.0, 25.0, 8.0);
        let advantage = (6.0 - 6.04) / 6.14 + 0.24;
        assert_relative_eq!(f, 0.5 + 0.25 * advantage, epsilon = 1e-12);
        assert_relative_eq!(f, 0.5583713, epsilon = 1e-6);
    }

    // ── Preconditions ────────────────────────────────────────────────────────

    #[test]
    fn fewer_than_two_innings_is_none() {
        assert_eq!(estimate(&[], "t20"), None);
        assert_eq!(estimate(&[inn(180, 5, 20.0)], "t20"), None);
    }

    #[test]
    fn missing_runs_is_none() {
        let mut second = inn(50, 1, 6.0);
        second.runs = None;
        assert_eq!(estimate(&[inn(180, 5, 20.0), second], "t20"), None);

        let mut first = inn(180, 5, 20.0);
        first.runs = None;
        assert_eq!(estimate(&[first, inn(50, 1, 6.0)], "t20"), None);
    }

    #[test]
    fn third_innings_ignored() {
        let two = [inn(300, 5, 50.0), inn(150, 2, 25.0)];
        let three = [inn(300, 5, 50.0), inn(150, 2, 25.0), inn(999, 0, 1.0)];
        assert_eq!(estimate(&two, "odi"), estimate(&three, "odi"));
    }

    // ── Edge behaviour ───────────────────────────────────────────────────────

    #[test]
    fn exact_target_runs_is_win() {
        // 180 + 1 = 181 needed, 181 scored
        let scores = [inn(180, 5, 20.0), inn(181, 9, 19.5)];
        assert_eq!(estimate(&scores, "t20"), Some(wp(100, 0)));
    }

    #[test]
    fn scores_level_is_still_open() {
        let scores = [inn(180, 5, 20.0), inn(180, 9, 19.5)];
        let p = estimate(&scores, "t20").unwrap();
        assert!(p.batting_win > 0 && p.batting_win < 100);
    }

    #[test]
    fn overs_beyond_format_is_loss() {
        // ODI overs against a T20 projection
        let scores = [inn(250, 5, 50.0), inn(120, 2, 30.0)];
        assert_eq!(estimate(&scores, "t20"), Some(wp(0, 100)));
    }

    #[test]
    fn innings_start_uses_floor() {
        // 0 overs bowled, no runs: cur_rr = 0, req_rr = 161/20
        let second = InningsScore {
            inning_label: None,
            runs: Some(0),
            wickets: None,
            overs_bowled: None,
        };
        let p = estimate(&[inn(160, 7, 20.0), second], "t20").unwrap();
        // advantage = (0 - 8.05) / 8.15 + 0.4 = -0.5877..., fraction = 0.3530...
        assert_eq!(p, wp(35, 65));
    }

    #[test]
    fn clamp_bounds() {
        // Rapid start, wickets intact: pinned at 0.97
        let fast = [inn(120, 9, 20.0), inn(60, 0, 3.0)];
        assert_eq!(estimate(&fast, "t20"), Some(wp(97, 3)));
        // Rate term is bounded below by -1, so only the helper can reach the floor
        let f = chasing_win_fraction(0.0, 19.9, 500.0, 0.1, -20.0);
        assert_relative_eq!(f, 0.03, epsilon = 1e-12);
    }

    #[test]
    fn collapse_stays_above_floor() {
        // cur_rr = 2.67, req_rr = 36.2, one wicket in hand
        let slow = [inn(220, 4, 20.0), inn(40, 9, 15.0)];
        assert_eq!(estimate(&slow, "t20"), Some(wp(19, 81)));
    }

    #[test]
    fn unknown_format_projects_twenty_overs() {
        let scores = [inn(150, 5, 20.0), inn(80, 3, 10.0)];
        assert_eq!(estimate(&scores, ""), estimate(&scores, "t20"));
        assert_eq!(estimate(&scores, "test"), estimate(&scores, "t20"));
    }

    // ── Properties ───────────────────────────────────────────────────────────

    #[test]
    fn monotonic_in_chasing_runs() {
        let first = inn(200, 6, 20.0);
        let mut last = 0u8;
        for runs in 0..=220 {
            let p = estimate(&[first.clone(), inn(runs, 4, 12.3)], "t20").unwrap();
            assert!(
                p.batting_win >= last,
                "batting_win dropped from {} to {} at {} runs",
                last,
                p.batting_win,
                runs
            );
            last = p.batting_win;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn percentages_sum_close_to_hundred() {
        let first = inn(170, 7, 20.0);
        for runs in (0..170).step_by(7) {
            for wickets in 0..=9u8 {
                for overs in [0.0, 0.3, 4.2, 10.0, 15.5, 19.5] {
                    let p = estimate(&[first.clone(), inn(runs, wickets, overs)], "t20").unwrap();
                    let sum = i32::from(p.batting_win) + i32::from(p.bowling_win);
                    assert!((99..=101).contains(&sum), "sum {} for {:?}", sum, p);
                    assert!((3..=97).contains(&p.batting_win), "{:?}", p);
                }
            }
        }
    }

    #[test]
    fn decided_cases_sum_exactly_hundred() {
        let won = estimate(&[inn(100, 5, 20.0), inn(140, 2, 12.0)], "t20").unwrap();
        let lost = estimate(&[inn(100, 5, 20.0), inn(60, 8, 20.0)], "t20").unwrap();
        assert_eq!(u32::from(won.batting_win) + u32::from(won.bowling_win), 100);
        assert_eq!(u32::from(lost.batting_win) + u32::from(lost.bowling_win), 100);
    }
}
