//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IntentRecognizer` - ranked intent + entity candidates for an utterance
//! - `DialogRuntime` - owns and advances sub-dialogs per conversation
//! - `StateStore` - per-user and per-conversation persisted records

mod dialog_runtime;
mod intent_recognizer;
mod state_store;

pub use dialog_runtime::{DialogRuntime, DialogRuntimeError, DialogTurnResult};
pub use intent_recognizer::{IntentRecognizer, RecognizerError};
pub use state_store::{StateStore, StateStoreError};
