//! ProcessTurnHandler - the turn dispatcher.
//!
//! Orchestrates one turn to completion: welcome events, recognition,
//! the greeting side channel, interrupts, sub-dialog advancement, intent
//! routing, and the end-of-turn state flush. Turns for one conversation
//! are processed strictly in sequence; everything here is turn-local
//! except the two persisted records, read once and written once.

use std::sync::Arc;

use crate::config::BotConfig;
use crate::domain::dialog::{
    DialogCommand, DialogTurnStatus, InterruptClassifier, OutboundAction, Participant,
    TurnActivity, TurnRouter,
};
use crate::domain::foundation::{ConversationId, TurnId, UserId};
use crate::domain::greeting::GreetingState;
use crate::domain::order::EntityNormalizer;
use crate::domain::response::ResponseComposer;
use crate::ports::{
    DialogRuntime, DialogRuntimeError, IntentRecognizer, RecognizerError, StateStore,
    StateStoreError,
};

/// Command to process one inbound turn.
#[derive(Debug, Clone)]
pub struct ProcessTurnCommand {
    pub conversation_id: ConversationId,
    pub user_id: UserId,
    pub activity: TurnActivity,
}

/// Result of a processed turn.
#[derive(Debug, Clone)]
pub struct ProcessTurnResult {
    pub turn_id: TurnId,
    /// Outbound actions for the channel transport, in emission order.
    pub actions: Vec<OutboundAction>,
}

/// Error type for turn processing.
///
/// Any of these aborts the turn; the flush never runs and the turn's
/// effects (other than already-sent messages) do not survive.
#[derive(Debug, thiserror::Error)]
pub enum ProcessTurnError {
    #[error(transparent)]
    Recognizer(#[from] RecognizerError),

    #[error(transparent)]
    Dialog(#[from] DialogRuntimeError),

    #[error(transparent)]
    Store(#[from] StateStoreError),
}

/// Handler for processing turns.
pub struct ProcessTurnHandler {
    recognizer: Arc<dyn IntentRecognizer>,
    dialogs: Arc<dyn DialogRuntime>,
    store: Arc<dyn StateStore>,
    bot: BotConfig,
    normalizer: EntityNormalizer,
    classifier: InterruptClassifier,
    router: TurnRouter,
    composer: ResponseComposer,
}

impl ProcessTurnHandler {
    pub fn new(
        recognizer: Arc<dyn IntentRecognizer>,
        dialogs: Arc<dyn DialogRuntime>,
        store: Arc<dyn StateStore>,
        bot: BotConfig,
    ) -> Self {
        Self {
            recognizer,
            dialogs,
            store,
            bot,
            normalizer: EntityNormalizer::new(),
            classifier: InterruptClassifier::new(),
            router: TurnRouter::new(),
            composer: ResponseComposer::new(),
        }
    }

    #[tracing::instrument(
        name = "process_turn",
        skip_all,
        fields(conversation = %cmd.conversation_id, user = %cmd.user_id)
    )]
    pub async fn handle(
        &self,
        cmd: ProcessTurnCommand,
    ) -> Result<ProcessTurnResult, ProcessTurnError> {
        let turn_id = TurnId::new();

        let (actions, greeting) = match &cmd.activity {
            TurnActivity::MembersAdded { members } => (self.welcome_members(members), None),
            TurnActivity::Message { text } => {
                let (actions, greeting) = self.process_message(&cmd, text).await?;
                (actions, Some(greeting))
            }
        };

        self.flush(&cmd, greeting.as_ref()).await?;

        Ok(ProcessTurnResult { turn_id, actions })
    }

    /// One welcome card per joined participant, skipping the bot itself.
    fn welcome_members(&self, members: &[Participant]) -> Vec<OutboundAction> {
        members
            .iter()
            .filter(|member| member.id != self.bot.id)
            .map(|member| {
                OutboundAction::Card(self.composer.welcome_card(&self.bot.name, &member.name))
            })
            .collect()
    }

    async fn process_message(
        &self,
        cmd: &ProcessTurnCommand,
        text: &str,
    ) -> Result<(Vec<OutboundAction>, GreetingState), ProcessTurnError> {
        // A missing top intent surfaces here as a contract error and
        // aborts the turn before any state is touched.
        let recognition = self.recognizer.recognize(text).await?;
        let intent = recognition.intent();
        tracing::debug!(intent = %intent, "recognized top intent");

        // The greeting side channel runs on every turn, whatever the intent.
        let normalization = self.normalizer.normalize(&recognition);
        let mut greeting = self
            .store
            .load_greeting(&cmd.user_id)
            .await?
            .unwrap_or_default();
        if greeting.apply(&normalization.greeting) {
            tracing::debug!("greeting slots updated");
        }

        // Interrupts win over sub-dialog continuation and intent routing.
        let has_active = self.dialogs.has_active(&cmd.conversation_id).await?;
        let interrupt = self.classifier.classify(&intent, has_active);
        if interrupt.handled {
            tracing::debug!(intent = %intent, "interrupt handled, no dialog advancement");
            let mut actions = interrupt.messages;
            if let Some(command) = interrupt.command {
                actions.extend(self.apply_command(&cmd.conversation_id, command).await?);
            }
            return Ok((actions, greeting));
        }

        // An in-progress sub-dialog's own turn handling wins over routing.
        let turn = self.dialogs.continue_active(&cmd.conversation_id).await?;
        if turn.responded() {
            return Ok((turn.responses, greeting));
        }

        let mut actions = Vec::new();
        match turn.status {
            DialogTurnStatus::Empty => {
                let routed = self.router.route(&intent, &normalization.order);
                tracing::debug!(
                    intent = %intent,
                    complete = normalization.order.is_complete(),
                    "routed intent"
                );
                actions.extend(routed.actions);
                if let Some(command) = routed.command {
                    actions.extend(self.apply_command(&cmd.conversation_id, command).await?);
                }
            }
            DialogTurnStatus::Waiting => {}
            DialogTurnStatus::Complete => {
                self.dialogs.end_active(&cmd.conversation_id).await?;
            }
            DialogTurnStatus::Other => {
                tracing::warn!("unrecognized dialog status, cancelling all sub-dialogs");
                self.dialogs.cancel_all(&cmd.conversation_id).await?;
            }
        }

        Ok((actions, greeting))
    }

    async fn apply_command(
        &self,
        conversation: &ConversationId,
        command: DialogCommand,
    ) -> Result<Vec<OutboundAction>, ProcessTurnError> {
        match command {
            DialogCommand::Begin(dialog_id) => {
                Ok(self.dialogs.begin(conversation, dialog_id).await?.responses)
            }
            DialogCommand::CancelAll => {
                self.dialogs.cancel_all(conversation).await?;
                Ok(Vec::new())
            }
            DialogCommand::Reprompt => Ok(self.dialogs.reprompt(conversation).await?.responses),
        }
    }

    /// The single end-of-turn persistence step, run on every successful
    /// exit path. A turn that errors before this point leaves no writes.
    async fn flush(
        &self,
        cmd: &ProcessTurnCommand,
        greeting: Option<&GreetingState>,
    ) -> Result<(), ProcessTurnError> {
        if let Some(state) = greeting {
            self.store.save_greeting(&cmd.user_id, state).await?;
        }
        let record = self.dialogs.snapshot(&cmd.conversation_id).await?;
        self.store
            .save_dialog_state(&cmd.conversation_id, &record)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedRecognizer, InMemoryDialogRuntime, InMemoryStateStore};
    use crate::domain::recognition::{EntityCandidate, EntityMap, RecognitionResult};

    fn buy_recognition() -> RecognitionResult {
        let mut entities = EntityMap::new();
        entities.insert("수량".to_string(), vec![EntityCandidate::new("1주")]);
        entities.insert("종목".to_string(), vec![EntityCandidate::new("신한 지주")]);
        entities.insert("단가".to_string(), vec![EntityCandidate::new("현재가")]);
        RecognitionResult::new("Buy", entities).unwrap()
    }

    fn handler_with(recognizer: FixedRecognizer) -> (ProcessTurnHandler, Arc<InMemoryStateStore>) {
        let store = Arc::new(InMemoryStateStore::new());
        let handler = ProcessTurnHandler::new(
            Arc::new(recognizer),
            Arc::new(InMemoryDialogRuntime::new()),
            store.clone(),
            BotConfig::default(),
        );
        (handler, store)
    }

    fn message_command(text: &str) -> ProcessTurnCommand {
        ProcessTurnCommand {
            conversation_id: ConversationId::new("conv-1"),
            user_id: UserId::new("user-1"),
            activity: TurnActivity::message(text),
        }
    }

    #[tokio::test]
    async fn test_complete_buy_turn_emits_event() {
        let (handler, _) = handler_with(FixedRecognizer::returning(buy_recognition()));

        let result = handler.handle(message_command("신한지주 1주 현재가 매수")).await.unwrap();

        let event = result
            .actions
            .iter()
            .find_map(|a| a.as_event())
            .expect("buy event");
        assert_eq!(event.name, "buy-intent");
        assert_eq!(event.value, "1|SEP|신한지주|SEP|cp");
    }

    #[tokio::test]
    async fn test_turn_flushes_state_once() {
        let (handler, store) = handler_with(FixedRecognizer::returning(buy_recognition()));

        handler.handle(message_command("매수")).await.unwrap();

        assert_eq!(store.greeting_count().await, 1);
        assert_eq!(store.dialog_count().await, 1);
    }

    #[tokio::test]
    async fn test_missing_top_intent_aborts_before_flush() {
        let (handler, store) = handler_with(FixedRecognizer::missing_intent());

        let result = handler.handle(message_command("뭐라도")).await;

        assert!(matches!(result, Err(ProcessTurnError::Recognizer(_))));
        assert_eq!(store.greeting_count().await, 0);
        assert_eq!(store.dialog_count().await, 0);
    }

    #[tokio::test]
    async fn test_members_added_welcomes_everyone_but_the_bot() {
        let (handler, store) = handler_with(FixedRecognizer::returning(buy_recognition()));
        let bot_id = BotConfig::default().id;

        let cmd = ProcessTurnCommand {
            conversation_id: ConversationId::new("conv-1"),
            user_id: UserId::new("user-1"),
            activity: TurnActivity::MembersAdded {
                members: vec![
                    Participant::new(bot_id, "bot"),
                    Participant::new("user-7", "지민"),
                ],
            },
        };

        let result = handler.handle(cmd).await.unwrap();

        assert_eq!(result.actions.len(), 1);
        assert!(matches!(result.actions[0], OutboundAction::Card(_)));
        // Welcome turns persist conversation state but no greeting record.
        assert_eq!(store.greeting_count().await, 0);
        assert_eq!(store.dialog_count().await, 1);
    }
}
