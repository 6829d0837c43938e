//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `TRADE_PILOT`
//! prefix and `__` (double underscore) as the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use trade_pilot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod bot;
mod error;
mod recognizer;

pub use bot::BotConfig;
pub use error::{ConfigError, ValidationError};
pub use recognizer::RecognizerConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bot identity (channel id comparison, welcome card)
    #[serde(default)]
    pub bot: BotConfig,

    /// Hosted recognizer endpoint configuration
    pub recognizer: RecognizerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads variables such as
    /// `TRADE_PILOT__RECOGNIZER__ENDPOINT` into the nested structs.
    ///
    /// # Errors
    /// Returns `ConfigError` when required values are missing or cannot
    /// be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRADE_PILOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bot.validate()?;
        self.recognizer.validate()?;
        Ok(())
    }
}
