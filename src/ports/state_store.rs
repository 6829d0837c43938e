//! State store port.
//!
//! One greeting record per user, one dialog record per conversation.
//! Records are read once and written once per turn; concurrent writers are
//! resolved last-write-wins by the store itself.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::{ConversationId, UserId};
use crate::domain::greeting::GreetingState;

/// Errors from the state store.
///
/// Persistence failures are fatal and propagate to the caller; the core
/// makes no partial-persistence guarantees.
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("Failed to serialize record: {0}")]
    Serialization(String),

    #[error("Failed to deserialize record: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for persisted per-user and per-conversation state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Loads a user's greeting record, if one exists.
    async fn load_greeting(&self, user: &UserId)
        -> Result<Option<GreetingState>, StateStoreError>;

    /// Writes a user's greeting record, replacing any previous value.
    async fn save_greeting(
        &self,
        user: &UserId,
        state: &GreetingState,
    ) -> Result<(), StateStoreError>;

    /// Loads a conversation's dialog record, if one exists.
    ///
    /// The record is an opaque blob owned by the dialog runtime.
    async fn load_dialog_state(
        &self,
        conversation: &ConversationId,
    ) -> Result<Option<Value>, StateStoreError>;

    /// Writes a conversation's dialog record, replacing any previous value.
    async fn save_dialog_state(
        &self,
        conversation: &ConversationId,
        record: &Value,
    ) -> Result<(), StateStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn StateStore) {}

    #[test]
    fn test_error_display() {
        let err = StateStoreError::Io("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }
}
