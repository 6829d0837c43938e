//! Canned recognizer for tests and offline runs.

use async_trait::async_trait;

use crate::domain::recognition::{RecognitionError, RecognitionResult};
use crate::ports::{IntentRecognizer, RecognizerError};

/// Returns one fixed result for every utterance.
pub struct FixedRecognizer {
    result: Option<RecognitionResult>,
}

impl FixedRecognizer {
    /// Always recognizes the given result.
    pub fn returning(result: RecognitionResult) -> Self {
        Self {
            result: Some(result),
        }
    }

    /// Simulates a recognizer that violates the output contract.
    pub fn missing_intent() -> Self {
        Self { result: None }
    }
}

#[async_trait]
impl IntentRecognizer for FixedRecognizer {
    async fn recognize(&self, _utterance: &str) -> Result<RecognitionResult, RecognizerError> {
        match &self.result {
            Some(result) => Ok(result.clone()),
            None => Err(RecognizerError::Contract(
                RecognitionError::MissingTopIntent,
            )),
        }
    }
}
