use serde::{Deserialize, Serialize};

/// Round result from the player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
}

impl RoundOutcome {
    /// Result banner text shown by the host UI
    pub fn display_text(&self) -> &'static str {
        match self {
            RoundOutcome::Win => "あなたの勝ち！",
            RoundOutcome::Lose => "あなたの負け...",
            RoundOutcome::Draw => "あいこ",
        }
    }

    /// Same round seen from the opponent's side
    pub fn invert(&self) -> RoundOutcome {
        match self {
            RoundOutcome::Win => RoundOutcome::Lose,
            RoundOutcome::Lose => RoundOutcome::Win,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_is_an_involution() {
        for outcome in [RoundOutcome::Win, RoundOutcome::Lose, RoundOutcome::Draw] {
            assert_eq!(outcome.invert().invert(), outcome);
        }
        assert_eq!(RoundOutcome::Win.invert(), RoundOutcome::Lose);
        assert_eq!(RoundOutcome::Draw.invert(), RoundOutcome::Draw);
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&RoundOutcome::Win).unwrap(), "\"win\"");
        let parsed: RoundOutcome = serde_json::from_str("\"draw\"").unwrap();
        assert_eq!(parsed, RoundOutcome::Draw);
    }
}
