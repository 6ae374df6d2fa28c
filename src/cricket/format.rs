/// Limited-overs format inferred from the free-text `matchType` field.
///
/// This is a substring heuristic, not a validated enum: a 50-over format whose
/// name contains neither "odi" nor "one day" falls through to `Other` and is
/// projected over 20 overs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFormat {
    T20,
    Odi,
    Other,
}

impl MatchFormat {
    pub fn from_match_type(match_type: &str) -> Self {
        let t = match_type.to_lowercase();
        if t.contains("t20") {
            MatchFormat::T20
        } else if t.contains("odi") || t.contains("one day") {
            MatchFormat::Odi
        } else {
            MatchFormat::Other
        }
    }

    /// Overs per innings used for run-rate projection.
    pub fn total_overs(&self) -> f64 {
        match self {
            MatchFormat::Odi => 50.0,
            MatchFormat::T20 | MatchFormat::Other => 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(MatchFormat::from_match_type("t20"), MatchFormat::T20);
        assert_eq!(MatchFormat::from_match_type("T20I"), MatchFormat::T20);
        assert_eq!(MatchFormat::from_match_type("ODI"), MatchFormat::Odi);
        assert_eq!(MatchFormat::from_match_type("One Day International"), MatchFormat::Odi);
        assert_eq!(MatchFormat::from_match_type("test"), MatchFormat::Other);
        assert_eq!(MatchFormat::from_match_type(""), MatchFormat::Other);
    }

    #[test]
    fn test_total_overs() {
        assert_eq!(MatchFormat::T20.total_overs(), 20.0);
        assert_eq!(MatchFormat::Odi.total_overs(), 50.0);
        assert_eq!(MatchFormat::Other.total_overs(), 20.0);
    }

    #[test]
    fn test_t20_takes_precedence() {
        assert_eq!(MatchFormat::from_match_type("t20 / odi double header"), MatchFormat::T20);
    }

    #[test]
    fn test_women_50_over_misclassified() {
        assert_eq!(MatchFormat::from_match_type("wodi50"), MatchFormat::Odi);
        assert_eq!(MatchFormat::from_match_type("women's 50-over"), MatchFormat::Other);
    }
}
