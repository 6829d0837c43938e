//! Hosted recognizer configuration.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Connection settings for the hosted natural-language recognizer.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerConfig {
    /// Base endpoint URL.
    pub endpoint: String,

    /// Recognizer application id.
    pub app_id: String,

    /// Subscription key sent with every request.
    pub subscription_key: Secret<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RecognizerConfig {
    /// Get timeout as Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate recognizer configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
            return Err(ValidationError::InvalidEndpoint);
        }
        if self.app_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("RECOGNIZER__APP_ID"));
        }
        if self.subscription_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired(
                "RECOGNIZER__SUBSCRIPTION_KEY",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    10
}
