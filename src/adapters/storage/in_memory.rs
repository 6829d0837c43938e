//! In-memory state store.
//!
//! Stores greeting and dialog records in memory. Useful for testing and
//! development.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ConversationId, UserId};
use crate::domain::greeting::GreetingState;
use crate::ports::{StateStore, StateStoreError};

/// In-memory storage for per-user and per-conversation records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    greetings: Arc<RwLock<HashMap<UserId, GreetingState>>>,
    dialogs: Arc<RwLock<HashMap<ConversationId, Value>>>,
}

impl InMemoryStateStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.greetings.write().await.clear();
        self.dialogs.write().await.clear();
    }

    /// Number of stored greeting records.
    pub async fn greeting_count(&self) -> usize {
        self.greetings.read().await.len()
    }

    /// Number of stored dialog records.
    pub async fn dialog_count(&self) -> usize {
        self.dialogs.read().await.len()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn load_greeting(
        &self,
        user: &UserId,
    ) -> Result<Option<GreetingState>, StateStoreError> {
        Ok(self.greetings.read().await.get(user).cloned())
    }

    async fn save_greeting(
        &self,
        user: &UserId,
        state: &GreetingState,
    ) -> Result<(), StateStoreError> {
        self.greetings
            .write()
            .await
            .insert(user.clone(), state.clone());
        Ok(())
    }

    async fn load_dialog_state(
        &self,
        conversation: &ConversationId,
    ) -> Result<Option<Value>, StateStoreError> {
        Ok(self.dialogs.read().await.get(conversation).cloned())
    }

    async fn save_dialog_state(
        &self,
        conversation: &ConversationId,
        record: &Value,
    ) -> Result<(), StateStoreError> {
        self.dialogs
            .write()
            .await
            .insert(conversation.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::GreetingSlots;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_and_load_greeting() {
        let store = InMemoryStateStore::new();
        let user = UserId::new("user-1");
        let mut state = GreetingState::new();
        state.apply(&GreetingSlots {
            name: Some("Claire".to_string()),
            city: None,
        });

        store.save_greeting(&user, &state).await.unwrap();
        let loaded = store.load_greeting(&user).await.unwrap();

        assert_eq!(loaded, Some(state));
    }

    #[tokio::test]
    async fn test_load_missing_greeting_is_none() {
        let store = InMemoryStateStore::new();

        let loaded = store.load_greeting(&UserId::new("nobody")).await.unwrap();

        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn test_save_greeting_overwrites() {
        let store = InMemoryStateStore::new();
        let user = UserId::new("user-1");

        store
            .save_greeting(&user, &GreetingState::new())
            .await
            .unwrap();
        let mut updated = GreetingState::new();
        updated.apply(&GreetingSlots {
            name: Some("Dana".to_string()),
            city: None,
        });
        store.save_greeting(&user, &updated).await.unwrap();

        assert_eq!(store.greeting_count().await, 1);
        let loaded = store.load_greeting(&user).await.unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("Dana"));
    }

    #[tokio::test]
    async fn test_dialog_record_round_trip() {
        let store = InMemoryStateStore::new();
        let conversation = ConversationId::new("conv-1");
        let record = json!([{"id": "greeting", "step": 1}]);

        store
            .save_dialog_state(&conversation, &record)
            .await
            .unwrap();
        let loaded = store.load_dialog_state(&conversation).await.unwrap();

        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_clear_empties_both_maps() {
        let store = InMemoryStateStore::new();
        store
            .save_greeting(&UserId::new("u"), &GreetingState::new())
            .await
            .unwrap();
        store
            .save_dialog_state(&ConversationId::new("c"), &json!([]))
            .await
            .unwrap();

        store.clear().await;

        assert_eq!(store.greeting_count().await, 0);
        assert_eq!(store.dialog_count().await, 0);
    }
}
