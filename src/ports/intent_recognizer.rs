//! Intent recognizer port.
//!
//! The recognizer turns raw utterance text into a ranked intent plus
//! entity candidates. This core only consumes that contract; it performs
//! no natural-language understanding and no retries of its own.

use async_trait::async_trait;

use crate::domain::recognition::{RecognitionError, RecognitionResult};

/// Errors from the recognizer boundary.
///
/// Both variants are fatal for the turn that raised them: the dispatcher
/// rejects the turn rather than guess at a missing intent.
#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("Recognizer transport failure: {0}")]
    Transport(String),

    #[error(transparent)]
    Contract(#[from] RecognitionError),
}

/// Port for the external natural-language recognizer.
#[async_trait]
pub trait IntentRecognizer: Send + Sync {
    /// Recognizes one utterance.
    ///
    /// # Errors
    /// Returns `RecognizerError::Transport` when the recognizer cannot be
    /// reached, `RecognizerError::Contract` when its payload violates the
    /// output contract (for example, no top intent).
    async fn recognize(&self, utterance: &str) -> Result<RecognitionResult, RecognizerError>;
}
