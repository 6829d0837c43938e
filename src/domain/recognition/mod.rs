//! Recognizer output contract.
//!
//! The external recognizer returns a ranked top intent plus a map of
//! entity-type name to ordered candidate values. This module validates
//! that shape exactly once, at the boundary; business logic downstream
//! works with the typed result and never re-checks it.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating a recognizer result.
///
/// These are input-contract violations: the turn that produced them is
/// rejected before any state mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecognitionError {
    #[error("Recognizer result is missing a top intent")]
    MissingTopIntent,

    #[error("Malformed recognizer payload: {0}")]
    MalformedPayload(String),
}

/// One candidate value for an entity type, in recognizer order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityCandidate {
    pub text: String,
    #[serde(default)]
    pub score: f64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl EntityCandidate {
    /// Creates a candidate with full confidence and no subtype.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score: 1.0,
            kind: String::new(),
        }
    }
}

/// Entity-type name to ordered candidate list.
///
/// Keys are domain-specific strings, not a closed set; lists may be empty.
pub type EntityMap = HashMap<String, Vec<EntityCandidate>>;

/// The user's goal for an utterance, parsed from the recognizer's top intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Buy,
    Sell,
    Balance,
    Cancel,
    Help,
    None,
    Unknown(String),
}

impl Intent {
    /// Parses a top-intent string. Never fails: unrecognized intents map
    /// to `Unknown` and fall through to the did-not-understand route.
    pub fn parse(top_intent: &str) -> Self {
        match top_intent {
            "Greeting" => Intent::Greeting,
            "Buy" => Intent::Buy,
            "Sell" => Intent::Sell,
            "Balance" => Intent::Balance,
            "Cancel" => Intent::Cancel,
            "Help" => Intent::Help,
            "None" => Intent::None,
            other => Intent::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Greeting => write!(f, "Greeting"),
            Intent::Buy => write!(f, "Buy"),
            Intent::Sell => write!(f, "Sell"),
            Intent::Balance => write!(f, "Balance"),
            Intent::Cancel => write!(f, "Cancel"),
            Intent::Help => write!(f, "Help"),
            Intent::None => write!(f, "None"),
            Intent::Unknown(s) => write!(f, "{}", s),
        }
    }
}

/// Raw wire shape, deserialized before validation.
#[derive(Debug, Deserialize)]
struct RawRecognition {
    #[serde(rename = "topIntent")]
    top_intent: Option<String>,
    #[serde(default)]
    entities: EntityMap,
}

/// Validated recognizer output for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    top_intent: String,
    entities: EntityMap,
}

impl RecognitionResult {
    /// Creates a result from already-typed parts.
    ///
    /// # Errors
    /// Returns `RecognitionError::MissingTopIntent` for an empty intent.
    pub fn new(
        top_intent: impl Into<String>,
        entities: EntityMap,
    ) -> Result<Self, RecognitionError> {
        let top_intent = top_intent.into();
        if top_intent.trim().is_empty() {
            return Err(RecognitionError::MissingTopIntent);
        }
        Ok(Self {
            top_intent,
            entities,
        })
    }

    /// Decodes and validates a raw recognizer payload.
    ///
    /// This is the single place the recognizer's JSON shape is checked.
    pub fn from_value(value: &Value) -> Result<Self, RecognitionError> {
        let raw: RawRecognition = serde_json::from_value(value.clone())
            .map_err(|e| RecognitionError::MalformedPayload(e.to_string()))?;
        let top_intent = raw.top_intent.ok_or(RecognitionError::MissingTopIntent)?;
        Self::new(top_intent, raw.entities)
    }

    /// The recognizer's best-guess intent name, verbatim.
    pub fn top_intent(&self) -> &str {
        &self.top_intent
    }

    /// The parsed intent.
    pub fn intent(&self) -> Intent {
        Intent::parse(&self.top_intent)
    }

    /// All recognized entities.
    pub fn entities(&self) -> &EntityMap {
        &self.entities
    }

    /// First candidate for an entity type.
    ///
    /// A key present with an empty candidate list is treated identically
    /// to an absent key.
    pub fn first_candidate(&self, entity_type: &str) -> Option<&EntityCandidate> {
        self.entities.get(entity_type).and_then(|list| list.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_decodes_intent_and_entities() {
        let payload = json!({
            "topIntent": "Buy",
            "entities": {
                "수량": [{"text": "1주", "score": 0.93, "type": "builtin.number"}],
                "종목": [{"text": "신한 지주", "score": 0.88, "type": "stock"}]
            }
        });

        let result = RecognitionResult::from_value(&payload).unwrap();

        assert_eq!(result.top_intent(), "Buy");
        assert_eq!(result.intent(), Intent::Buy);
        assert_eq!(result.first_candidate("수량").unwrap().text, "1주");
        assert_eq!(result.first_candidate("종목").unwrap().kind, "stock");
    }

    #[test]
    fn test_from_value_missing_top_intent_is_fatal() {
        let payload = json!({"entities": {}});

        let result = RecognitionResult::from_value(&payload);

        assert_eq!(result, Err(RecognitionError::MissingTopIntent));
    }

    #[test]
    fn test_from_value_rejects_malformed_entities() {
        let payload = json!({
            "topIntent": "Buy",
            "entities": {"수량": [{"score": 0.9}]}
        });

        let result = RecognitionResult::from_value(&payload);

        assert!(matches!(result, Err(RecognitionError::MalformedPayload(_))));
    }

    #[test]
    fn test_new_rejects_blank_intent() {
        let result = RecognitionResult::new("   ", EntityMap::new());

        assert_eq!(result, Err(RecognitionError::MissingTopIntent));
    }

    #[test]
    fn test_empty_candidate_list_equals_absent_key() {
        let mut entities = EntityMap::new();
        entities.insert("단가".to_string(), Vec::new());
        let result = RecognitionResult::new("Buy", entities).unwrap();

        assert!(result.first_candidate("단가").is_none());
        assert!(result.first_candidate("수량").is_none());
    }

    #[test]
    fn test_first_candidate_ignores_later_entries() {
        let mut entities = EntityMap::new();
        entities.insert(
            "종목".to_string(),
            vec![
                EntityCandidate::new("삼성전자"),
                EntityCandidate::new("삼성물산"),
            ],
        );
        let result = RecognitionResult::new("Buy", entities).unwrap();

        assert_eq!(result.first_candidate("종목").unwrap().text, "삼성전자");
    }

    #[test]
    fn test_intent_parse_known_and_unknown() {
        assert_eq!(Intent::parse("Cancel"), Intent::Cancel);
        assert_eq!(Intent::parse("None"), Intent::None);
        assert_eq!(
            Intent::parse("Weather"),
            Intent::Unknown("Weather".to_string())
        );
    }
}
