//! Bot identity configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// The bot's own channel identity.
///
/// Used to skip the bot itself when welcoming newly joined members, and
/// as the sender name on the welcome card.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Channel-assigned bot account id.
    #[serde(default = "default_bot_id")]
    pub id: String,

    /// Display name shown to users.
    #[serde(default = "default_bot_name")]
    pub name: String,
}

impl BotConfig {
    /// Validate bot configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("BOT__ID"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("BOT__NAME"));
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            id: default_bot_id(),
            name: default_bot_name(),
        }
    }
}

fn default_bot_id() -> String {
    "trade-pilot".to_string()
}

fn default_bot_name() -> String {
    "트레이드 파일럿".to_string()
}
