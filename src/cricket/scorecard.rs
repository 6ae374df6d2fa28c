use crate::models::InningsScore;

/// Render up to the first two innings as e.g.
/// `"IND-1 • 180/5 • 20 ov | AUS-1 • 90/6 • 15 ov"`.
///
/// Innings are taken in the order supplied. `runs/wickets` is shown only when
/// both are known. Returns `None` when there is nothing to show.
pub fn format_score(scores: &[InningsScore]) -> Option<String> {
    if scores.is_empty() {
        return None;
    }

    let text = scores
        .iter()
        .take(2)
        .map(format_innings)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn format_innings(innings: &InningsScore) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if let Some(label) = innings.inning_label.as_deref().filter(|l| !l.is_empty()) {
        parts.push(label.to_string());
    }
    if let (Some(r), Some(w)) = (innings.runs, innings.wickets) {
        parts.push(format!("{}/{}", r, w));
    }
    if let Some(o) = innings.overs_bowled {
        // f64 Display prints 20.0 as "20" and 15.4 as "15.4"
        parts.push(format!("{} ov", o));
    }
    parts.join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn innings(label: Option<&str>, r: Option<u32>, w: Option<u8>, o: Option<f64>) -> InningsScore {
        InningsScore {
            inning_label: label.map(str::to_string),
            runs: r,
            wickets: w,
            overs_bowled: o,
        }
    }

    #[test]
    fn test_two_innings() {
        let scores = vec![
            innings(Some("IND-1"), Some(180), Some(5), Some(20.0)),
            innings(Some("AUS-1"), Some(90), Some(6), Some(15.0)),
        ];
        assert_eq!(
            format_score(&scores).as_deref(),
            Some("IND-1 • 180/5 • 20 ov | AUS-1 • 90/6 • 15 ov")
        );
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(format_score(&[]), None);
    }

    #[test]
    fn test_only_first_two_innings() {
        let scores = vec![
            innings(Some("A"), Some(1), Some(0), None),
            innings(Some("B"), Some(2), Some(0), None),
            innings(Some("C"), Some(3), Some(0), None),
        ];
        assert_eq!(format_score(&scores).as_deref(), Some("A • 1/0 | B • 2/0"));
    }

    #[test]
    fn test_partial_score_fragment_skipped() {
        let scores = vec![
            innings(Some("NZ"), Some(120), None, Some(14.3)),
            innings(None, None, Some(2), None),
        ];
        assert_eq!(format_score(&scores).as_deref(), Some("NZ • 14.3 ov"));
    }

    #[test]
    fn test_empty_label_ignored() {
        let scores = vec![innings(Some(""), Some(45), Some(1), Some(6.2))];
        assert_eq!(format_score(&scores).as_deref(), Some("45/1 • 6.2 ov"));
    }

    #[test]
    fn test_all_fragments_empty_is_none() {
        let scores = vec![InningsScore::default(), InningsScore::default()];
        assert_eq!(format_score(&scores), None);
    }
}
