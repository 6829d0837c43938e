//! File-based state store.
//!
//! Stores each record as one JSON document under a root directory:
//! `greetings/<user>.json` and `dialogs/<conversation>.json`. A
//! development adapter, not a durability claim.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{ConversationId, UserId};
use crate::domain::greeting::GreetingState;
use crate::ports::{StateStore, StateStoreError};

/// File-backed storage for per-user and per-conversation records.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    base_path: PathBuf,
}

impl FileStateStore {
    /// Create a store rooted at a base directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn greeting_path(&self, user: &UserId) -> PathBuf {
        self.base_path
            .join("greetings")
            .join(format!("{}.json", file_key(user.as_str())))
    }

    fn dialog_path(&self, conversation: &ConversationId) -> PathBuf {
        self.base_path
            .join("dialogs")
            .join(format!("{}.json", file_key(conversation.as_str())))
    }

    async fn write_json(&self, path: &Path, json: String) -> Result<(), StateStoreError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| StateStoreError::Io(e.to_string()))?;
        }
        fs::write(path, json)
            .await
            .map_err(|e| StateStoreError::Io(e.to_string()))
    }

    async fn read_json(&self, path: &Path) -> Result<Option<String>, StateStoreError> {
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(path)
            .await
            .map(Some)
            .map_err(|e| StateStoreError::Io(e.to_string()))
    }
}

/// Flattens a channel-assigned id to a filesystem-safe key.
fn file_key(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load_greeting(
        &self,
        user: &UserId,
    ) -> Result<Option<GreetingState>, StateStoreError> {
        match self.read_json(&self.greeting_path(user)).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StateStoreError::Deserialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn save_greeting(
        &self,
        user: &UserId,
        state: &GreetingState,
    ) -> Result<(), StateStoreError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StateStoreError::Serialization(e.to_string()))?;
        self.write_json(&self.greeting_path(user), json).await
    }

    async fn load_dialog_state(
        &self,
        conversation: &ConversationId,
    ) -> Result<Option<Value>, StateStoreError> {
        match self.read_json(&self.dialog_path(conversation)).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StateStoreError::Deserialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn save_dialog_state(
        &self,
        conversation: &ConversationId,
        record: &Value,
    ) -> Result<(), StateStoreError> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StateStoreError::Serialization(e.to_string()))?;
        self.write_json(&self.dialog_path(conversation), json).await
    }
}
