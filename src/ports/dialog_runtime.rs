//! Dialog runtime port.
//!
//! Sub-dialogs (the greeting flow, for example) are owned and advanced by
//! an external dialog runtime. The dispatcher only issues commands and
//! observes per-turn results; it never walks dialog internals.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::dialog::{DialogTurnStatus, OutboundAction};
use crate::domain::foundation::ConversationId;

/// Errors from the dialog runtime.
#[derive(Debug, thiserror::Error)]
pub enum DialogRuntimeError {
    #[error("Unknown dialog id: {0}")]
    UnknownDialog(String),

    #[error("Dialog runtime failure: {0}")]
    Internal(String),
}

/// What one runtime call produced for a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogTurnResult {
    pub status: DialogTurnStatus,
    /// Responses the sub-dialog emitted this turn, in order.
    pub responses: Vec<OutboundAction>,
}

impl DialogTurnResult {
    /// An empty-stack result with no responses.
    pub fn empty() -> Self {
        Self {
            status: DialogTurnStatus::Empty,
            responses: Vec::new(),
        }
    }

    /// True when the sub-dialog produced a response this turn.
    ///
    /// A responding sub-dialog takes precedence over intent routing.
    pub fn responded(&self) -> bool {
        !self.responses.is_empty()
    }
}

/// Port for the external dialog runtime.
#[async_trait]
pub trait DialogRuntime: Send + Sync {
    /// Advances the active sub-dialog, if any.
    async fn continue_active(
        &self,
        conversation: &ConversationId,
    ) -> Result<DialogTurnResult, DialogRuntimeError>;

    /// Begins the named sub-dialog on top of the stack.
    async fn begin(
        &self,
        conversation: &ConversationId,
        dialog_id: &str,
    ) -> Result<DialogTurnResult, DialogRuntimeError>;

    /// Ends the active sub-dialog.
    async fn end_active(&self, conversation: &ConversationId) -> Result<(), DialogRuntimeError>;

    /// Cancels every active sub-dialog.
    async fn cancel_all(&self, conversation: &ConversationId) -> Result<(), DialogRuntimeError>;

    /// Asks the active sub-dialog to repeat its current prompt.
    async fn reprompt(
        &self,
        conversation: &ConversationId,
    ) -> Result<DialogTurnResult, DialogRuntimeError>;

    /// True when any sub-dialog is on the conversation's stack.
    async fn has_active(&self, conversation: &ConversationId) -> Result<bool, DialogRuntimeError>;

    /// Exports the conversation's dialog record for persistence.
    ///
    /// The record is opaque to the core; it is flushed to the state store
    /// once per turn.
    async fn snapshot(&self, conversation: &ConversationId) -> Result<Value, DialogRuntimeError>;
}
