//! In-memory dialog runtime.
//!
//! A scripted runtime sufficient for the dispatcher's contract: a
//! per-conversation dialog stack and the two-step greeting sub-dialog
//! (name prompt, then city prompt). Snapshots round-trip through JSON so
//! the core can persist the record between turns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialog::{DialogTurnStatus, OutboundAction, GREETING_DIALOG_ID};
use crate::domain::foundation::ConversationId;
use crate::ports::{DialogRuntime, DialogRuntimeError, DialogTurnResult};

/// Prompts of the greeting sub-dialog, in step order.
const GREETING_PROMPTS: [&str; 2] = ["성함이 어떻게 되세요?", "어느 도시에 살고 계세요?"];

/// One active sub-dialog on a conversation's stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DialogFrame {
    id: String,
    step: usize,
}

/// In-memory dialog runtime with per-conversation stacks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDialogRuntime {
    stacks: Arc<RwLock<HashMap<ConversationId, Vec<DialogFrame>>>>,
}

impl InMemoryDialogRuntime {
    /// Create an empty runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a conversation's stack from a persisted snapshot.
    pub async fn restore(
        &self,
        conversation: &ConversationId,
        record: &Value,
    ) -> Result<(), DialogRuntimeError> {
        let stack: Vec<DialogFrame> = serde_json::from_value(record.clone())
            .map_err(|e| DialogRuntimeError::Internal(e.to_string()))?;
        self.stacks
            .write()
            .await
            .insert(conversation.clone(), stack);
        Ok(())
    }

    fn prompt_at(step: usize) -> Option<DialogTurnResult> {
        GREETING_PROMPTS.get(step).map(|prompt| DialogTurnResult {
            status: DialogTurnStatus::Waiting,
            responses: vec![OutboundAction::Message((*prompt).to_string())],
        })
    }
}

#[async_trait]
impl DialogRuntime for InMemoryDialogRuntime {
    async fn continue_active(
        &self,
        conversation: &ConversationId,
    ) -> Result<DialogTurnResult, DialogRuntimeError> {
        let mut stacks = self.stacks.write().await;
        let Some(frame) = stacks
            .get_mut(conversation)
            .and_then(|stack| stack.last_mut())
        else {
            return Ok(DialogTurnResult::empty());
        };

        frame.step += 1;
        Ok(Self::prompt_at(frame.step).unwrap_or(DialogTurnResult {
            status: DialogTurnStatus::Complete,
            responses: Vec::new(),
        }))
    }

    async fn begin(
        &self,
        conversation: &ConversationId,
        dialog_id: &str,
    ) -> Result<DialogTurnResult, DialogRuntimeError> {
        if dialog_id != GREETING_DIALOG_ID {
            return Err(DialogRuntimeError::UnknownDialog(dialog_id.to_string()));
        }

        let mut stacks = self.stacks.write().await;
        stacks
            .entry(conversation.clone())
            .or_default()
            .push(DialogFrame {
                id: dialog_id.to_string(),
                step: 0,
            });

        Ok(Self::prompt_at(0).expect("greeting dialog has a first prompt"))
    }

    async fn end_active(&self, conversation: &ConversationId) -> Result<(), DialogRuntimeError> {
        let mut stacks = self.stacks.write().await;
        if let Some(stack) = stacks.get_mut(conversation) {
            stack.pop();
        }
        Ok(())
    }

    async fn cancel_all(&self, conversation: &ConversationId) -> Result<(), DialogRuntimeError> {
        self.stacks.write().await.remove(conversation);
        Ok(())
    }

    async fn reprompt(
        &self,
        conversation: &ConversationId,
    ) -> Result<DialogTurnResult, DialogRuntimeError> {
        let stacks = self.stacks.read().await;
        let Some(frame) = stacks.get(conversation).and_then(|stack| stack.last()) else {
            return Ok(DialogTurnResult::empty());
        };

        let step = frame.step.min(GREETING_PROMPTS.len() - 1);
        Ok(Self::prompt_at(step).expect("clamped step is a valid prompt"))
    }

    async fn has_active(&self, conversation: &ConversationId) -> Result<bool, DialogRuntimeError> {
        let stacks = self.stacks.read().await;
        Ok(stacks
            .get(conversation)
            .is_some_and(|stack| !stack.is_empty()))
    }

    async fn snapshot(&self, conversation: &ConversationId) -> Result<Value, DialogRuntimeError> {
        let stacks = self.stacks.read().await;
        let stack = stacks.get(conversation).cloned().unwrap_or_default();
        serde_json::to_value(stack).map_err(|e| DialogRuntimeError::Internal(e.to_string()))
    }
}
