use serde::{Deserialize, Serialize};

/// One extracted character-card record.
///
/// Field names and nesting are the output contract downstream corpus
/// tooling depends on; `card_type` serializes as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub idol_name: String,
    pub card_name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub lines: CardLines,
}

/// Voice lines in both raw (as scraped) and normalized form.
///
/// Invariant: each `normalized` sequence is the element-wise normalizer
/// image of the matching `raw` sequence, same length, same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLines {
    pub raw: LineSet,
    pub normalized: LineSet,
}

/// The three voice-line categories of a card page.
///
/// Any category may legitimately be empty; presence varies by card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    pub before_training: Vec<String>,
    pub after_training: Vec<String>,
    pub memorial_episode: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_type_serializes_as_type() {
        let record = CardRecord {
            idol_name: "ある名前".to_string(),
            card_name: "［限定］ある名前＋".to_string(),
            card_type: "キュート".to_string(),
            lines: CardLines {
                raw: LineSet::default(),
                normalized: LineSet::default(),
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "キュート");
        assert!(json.get("card_type").is_none());
        assert!(json["lines"]["raw"]["before_training"].is_array());
        assert!(json["lines"]["normalized"]["memorial_episode"].is_array());
    }
}
