//! Outbound action vocabulary.
//!
//! A turn's output is an ordered sequence of these actions, handed to the
//! external channel transport: plain text messages, structured card
//! attachments, and named events whose value is the canonical wire
//! descriptor.

use serde::{Deserialize, Serialize};

/// Event name for a confirmed-complete buy order.
pub const BUY_INTENT_EVENT: &str = "buy-intent";
/// Event name for a confirmed-complete sell order.
pub const SELL_INTENT_EVENT: &str = "sell-intent";
/// Event name for a balance inquiry.
pub const BALANCE_INTENT_EVENT: &str = "balance-intent";

/// Static target of the change-account card action.
pub const CHANGE_ACCOUNT_TARGET: &str = "change-account";

/// One button on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAction {
    pub title: String,
    pub value: String,
}

impl CardAction {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Structured card attachment: title, body and action list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAttachment {
    pub title: String,
    pub body: String,
    pub actions: Vec<CardAction>,
}

/// Named event carrying the canonical descriptor string downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventActivity {
    pub name: String,
    pub value: String,
}

impl EventActivity {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One outbound action, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundAction {
    Message(String),
    Card(CardAttachment),
    Event(EventActivity),
}

impl OutboundAction {
    /// Message text, when this action is a plain message.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            OutboundAction::Message(text) => Some(text),
            _ => None,
        }
    }

    /// Event payload, when this action is a named event.
    pub fn as_event(&self) -> Option<&EventActivity> {
        match self {
            OutboundAction::Event(event) => Some(event),
            _ => None,
        }
    }
}
