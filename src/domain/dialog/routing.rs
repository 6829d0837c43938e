//! Intent routing for turns with an empty dialog stack.

use crate::domain::order::{OrderDescriptor, TradeSide};
use crate::domain::recognition::Intent;
use crate::domain::response::{messages, ResponseComposer};

use super::{
    DialogCommand, EventActivity, OutboundAction, BALANCE_INTENT_EVENT, BUY_INTENT_EVENT,
    GREETING_DIALOG_ID, SELL_INTENT_EVENT,
};

/// What a routed intent produces: actions to emit and an optional dialog
/// instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedTurn {
    pub actions: Vec<OutboundAction>,
    pub command: Option<DialogCommand>,
}

impl RoutedTurn {
    fn respond(actions: Vec<OutboundAction>) -> Self {
        Self {
            actions,
            command: None,
        }
    }
}

/// The intent routing table applied when no sub-dialog is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnRouter {
    composer: ResponseComposer,
}

impl TurnRouter {
    pub fn new() -> Self {
        Self {
            composer: ResponseComposer::new(),
        }
    }

    pub fn route(&self, intent: &Intent, order: &OrderDescriptor) -> RoutedTurn {
        match intent {
            Intent::Greeting => RoutedTurn {
                actions: Vec::new(),
                command: Some(DialogCommand::Begin(GREETING_DIALOG_ID)),
            },
            Intent::Buy => self.route_order(TradeSide::Buy, order),
            Intent::Sell => self.route_order(TradeSide::Sell, order),
            Intent::Balance => RoutedTurn::respond(vec![
                OutboundAction::Message(messages::BALANCE_ACK.to_string()),
                OutboundAction::Event(EventActivity::new(BALANCE_INTENT_EVENT, order.to_wire())),
            ]),
            _ => RoutedTurn::respond(vec![OutboundAction::Message(
                messages::DID_NOT_UNDERSTAND.to_string(),
            )]),
        }
    }

    /// A trade event fires only for a complete descriptor; anything less
    /// routes to the provide-all-fields prompt.
    fn route_order(&self, side: TradeSide, order: &OrderDescriptor) -> RoutedTurn {
        if !order.is_complete() {
            return RoutedTurn::respond(vec![OutboundAction::Message(
                messages::INCOMPLETE_ORDER_PROMPT.to_string(),
            )]);
        }

        let composition = self.composer.compose(side, order);
        let event_name = match side {
            TradeSide::Buy => BUY_INTENT_EVENT,
            TradeSide::Sell => SELL_INTENT_EVENT,
        };

        RoutedTurn::respond(vec![
            OutboundAction::Message(composition.text),
            OutboundAction::Card(composition.card),
            OutboundAction::Event(EventActivity::new(event_name, order.to_wire())),
        ])
    }
}
