//! HTTP adapter for the hosted recognizer.
//!
//! Sends the utterance to the recognizer's prediction endpoint and decodes
//! the JSON payload through the single boundary validation in
//! `RecognitionResult::from_value`.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::RecognizerConfig;
use crate::domain::recognition::RecognitionResult;
use crate::ports::{IntentRecognizer, RecognizerError};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Recognizer client against a hosted NLU endpoint.
pub struct HttpRecognizer {
    client: reqwest::Client,
    config: RecognizerConfig,
}

impl HttpRecognizer {
    /// Builds a client with the configured request timeout.
    pub fn new(config: RecognizerConfig) -> Result<Self, RecognizerError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RecognizerError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn predict_url(&self) -> String {
        format!(
            "{}/apps/{}/predict",
            self.config.endpoint.trim_end_matches('/'),
            self.config.app_id
        )
    }
}

#[async_trait]
impl IntentRecognizer for HttpRecognizer {
    async fn recognize(&self, utterance: &str) -> Result<RecognitionResult, RecognizerError> {
        let response = self
            .client
            .post(self.predict_url())
            .header(
                SUBSCRIPTION_KEY_HEADER,
                self.config.subscription_key.expose_secret(),
            )
            .json(&serde_json::json!({ "query": utterance }))
            .send()
            .await
            .map_err(|e| RecognizerError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| RecognizerError::Transport(e.to_string()))?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| RecognizerError::Transport(e.to_string()))?;

        Ok(RecognitionResult::from_value(&payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    #[test]
    fn test_predict_url_strips_trailing_slash() {
        let recognizer = HttpRecognizer::new(RecognizerConfig {
            endpoint: "https://nlu.example.com/".to_string(),
            app_id: "app-0001".to_string(),
            subscription_key: Secret::new("sk-test".to_string()),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(
            recognizer.predict_url(),
            "https://nlu.example.com/apps/app-0001/predict"
        );
    }
}
