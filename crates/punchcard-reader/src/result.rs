use serde::Serialize;

use crate::decode::DecodedCard;
use crate::CardRegion;

/// How the threshold search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// Two consecutive trials produced the same text with no invalid columns.
    Stable,
    /// Every threshold was tried; the last trial is reported.
    Exhausted,
}

/// Summary of one threshold trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrialRecord {
    pub threshold: i32,
    pub text: String,
    pub invalid: usize,
}

/// Output of reading one card.
#[derive(Clone, Debug, Serialize)]
pub struct CardReadResult {
    pub region: CardRegion,
    /// Decode of the final trial.
    pub decoded: DecodedCard,
    /// Threshold of the final trial.
    pub threshold: i32,
    pub status: SearchStatus,
    pub trials: Vec<TrialRecord>,
}

impl CardReadResult {
    pub fn text(&self) -> &str {
        &self.decoded.text
    }

    pub fn invalid_count(&self) -> usize {
        self.decoded.invalid
    }

    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    /// Result line as printed by the command line tool.
    pub fn summary_line(&self) -> String {
        if self.invalid_count() == 0 {
            self.text().to_string()
        } else {
            format!(
                "{} ** invalid char count = {}",
                self.text(),
                self.invalid_count()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(decoded: DecodedCard) -> CardReadResult {
        CardReadResult {
            region: CardRegion::full(1, 1),
            decoded,
            threshold: 200,
            status: SearchStatus::Exhausted,
            trials: Vec::new(),
        }
    }

    #[test]
    fn summary_annotates_only_invalid_cards() {
        let unread = result(DecodedCard::unread());
        assert_eq!(
            unread.summary_line(),
            format!("{} ** invalid char count = 80", "@".repeat(80))
        );
        assert_eq!(unread.trial_count(), 0);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&SearchStatus::Stable).expect("json");
        assert_eq!(json, "\"stable\"");
    }
}
