//! Dialog domain: turn activities, dialog status, interrupts and routing.

mod actions;
mod activity;
mod interrupt;
mod routing;

pub use actions::{
    CardAction, CardAttachment, EventActivity, OutboundAction, BALANCE_INTENT_EVENT,
    BUY_INTENT_EVENT, CHANGE_ACCOUNT_TARGET, SELL_INTENT_EVENT,
};
pub use activity::{Participant, TurnActivity};
pub use interrupt::{InterruptClassifier, InterruptDecision};
pub use routing::{RoutedTurn, TurnRouter};

use serde::{Deserialize, Serialize};

/// Dialog id of the greeting sub-dialog, registered with the dialog runtime.
pub const GREETING_DIALOG_ID: &str = "greeting";

/// State of the active sub-dialog, as reported by the dialog runtime.
///
/// Owned by the runtime; read-only to this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogTurnStatus {
    /// No sub-dialog is on the stack.
    Empty,
    /// A sub-dialog is mid-prompt, waiting for user input.
    Waiting,
    /// The active sub-dialog has finished and can be ended.
    Complete,
    /// Anything the runtime reports outside the known set.
    Other,
}

/// Instruction for the dialog runtime, produced by interrupt handling or
/// intent routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCommand {
    /// Begin the named sub-dialog.
    Begin(&'static str),
    /// Cancel every active sub-dialog.
    CancelAll,
    /// Ask the active sub-dialog to repeat its prompt.
    Reprompt,
}
