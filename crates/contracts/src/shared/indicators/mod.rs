use serde::{Deserialize, Serialize};

/// How a stat card formats its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
    /// 0–100 security score shown as "NN/100".
    Score,
}

/// Visual status of a stat card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    /// Colour band for an average security score; `None` (nothing assessed) is neutral.
    pub fn for_score(score: Option<f64>) -> Self {
        match score {
            None => IndicatorStatus::Neutral,
            Some(s) if s >= 85.0 => IndicatorStatus::Good,
            Some(s) if s >= 70.0 => IndicatorStatus::Neutral,
            Some(s) if s >= 50.0 => IndicatorStatus::Warning,
            Some(_) => IndicatorStatus::Bad,
        }
    }

    /// Zero is good, anything else needs attention.
    pub fn for_problem_count(count: usize, bad_from: usize) -> Self {
        match count {
            0 => IndicatorStatus::Good,
            c if c >= bad_from => IndicatorStatus::Bad,
            _ => IndicatorStatus::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(IndicatorStatus::for_score(None), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::for_score(Some(91.0)), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::for_score(Some(72.5)), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::for_score(Some(55.0)), IndicatorStatus::Warning);
        assert_eq!(IndicatorStatus::for_score(Some(12.0)), IndicatorStatus::Bad);
    }

    #[test]
    fn test_problem_counts() {
        assert_eq!(IndicatorStatus::for_problem_count(0, 2), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::for_problem_count(1, 2), IndicatorStatus::Warning);
        assert_eq!(IndicatorStatus::for_problem_count(2, 2), IndicatorStatus::Bad);
    }

    #[test]
    fn test_format_is_tagged() {
        let json = serde_json::to_string(&ValueFormat::Percent { decimals: 1 }).unwrap();
        assert_eq!(json, r#"{"kind":"Percent","decimals":1}"#);
    }
}
