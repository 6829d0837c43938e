//! Interrupt classification.
//!
//! Cancel and Help are handled before sub-dialog continuation and before
//! intent routing, whatever the dialog state. They are the only path that
//! ends a turn before dialog advancement.

use crate::domain::recognition::Intent;
use crate::domain::response::messages;

use super::{DialogCommand, OutboundAction};

/// Outcome of interrupt classification for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct InterruptDecision {
    /// True when the turn is fully handled here and routing must not run.
    pub handled: bool,
    /// Messages to emit, in order.
    pub messages: Vec<OutboundAction>,
    /// Instruction for the dialog runtime, if any.
    pub command: Option<DialogCommand>,
}

impl InterruptDecision {
    fn not_handled() -> Self {
        Self {
            handled: false,
            messages: Vec::new(),
            command: None,
        }
    }

    fn handled(texts: &[&str], command: Option<DialogCommand>) -> Self {
        Self {
            handled: true,
            messages: texts
                .iter()
                .map(|t| OutboundAction::Message(t.to_string()))
                .collect(),
            command,
        }
    }
}

/// Classifies the top intent ahead of normal dialog routing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterruptClassifier;

impl InterruptClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, intent: &Intent, has_active_dialog: bool) -> InterruptDecision {
        match intent {
            Intent::Cancel => {
                if has_active_dialog {
                    InterruptDecision::handled(
                        &[messages::CANCEL_CONFIRMED],
                        Some(DialogCommand::CancelAll),
                    )
                } else {
                    InterruptDecision::handled(&[messages::NOTHING_TO_CANCEL], None)
                }
            }
            Intent::Help => {
                // Help re-prompts an active sub-dialog, it never cancels it.
                let command = has_active_dialog.then_some(DialogCommand::Reprompt);
                InterruptDecision::handled(&[messages::HELP_TEXT], command)
            }
            _ => InterruptDecision::not_handled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(intent: Intent, has_active_dialog: bool) -> InterruptDecision {
        InterruptClassifier::new().classify(&intent, has_active_dialog)
    }

    #[test]
    fn test_cancel_with_active_dialog_cancels_all() {
        let decision = classify(Intent::Cancel, true);

        assert!(decision.handled);
        assert_eq!(decision.command, Some(DialogCommand::CancelAll));
        assert_eq!(
            decision.messages[0].as_message(),
            Some(messages::CANCEL_CONFIRMED)
        );
    }

    #[test]
    fn test_cancel_without_active_dialog() {
        let decision = classify(Intent::Cancel, false);

        assert!(decision.handled);
        assert_eq!(decision.command, None);
        assert_eq!(
            decision.messages[0].as_message(),
            Some(messages::NOTHING_TO_CANCEL)
        );
    }

    #[test]
    fn test_help_emits_two_line_message() {
        let decision = classify(Intent::Help, false);

        assert!(decision.handled);
        assert_eq!(decision.command, None);
        let text = decision.messages[0].as_message().unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_help_with_active_dialog_reprompts() {
        let decision = classify(Intent::Help, true);

        assert_eq!(decision.command, Some(DialogCommand::Reprompt));
    }

    #[test]
    fn test_other_intents_are_not_handled() {
        for intent in [
            Intent::Greeting,
            Intent::Buy,
            Intent::Sell,
            Intent::Balance,
            Intent::None,
            Intent::Unknown("Weather".to_string()),
        ] {
            let decision = classify(intent, true);
            assert!(!decision.handled);
            assert!(decision.messages.is_empty());
        }
    }
}
