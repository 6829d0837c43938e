//! Inbound turn activities.

/// A conversation participant as reported by the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// What arrived on the channel for this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnActivity {
    /// A user utterance to run through the recognizer.
    Message { text: String },
    /// Channel system event: participants joined the conversation.
    MembersAdded { members: Vec<Participant> },
}

impl TurnActivity {
    /// Convenience constructor for a user message.
    pub fn message(text: impl Into<String>) -> Self {
        TurnActivity::Message { text: text.into() }
    }
}
