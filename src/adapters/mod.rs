//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `recognizer` - hosted NLU endpoint client, plus a canned test double
//! - `storage` - in-memory and file-backed state stores
//! - `dialogs` - in-memory dialog runtime with the scripted greeting flow

pub mod dialogs;
pub mod recognizer;
pub mod storage;

pub use dialogs::InMemoryDialogRuntime;
pub use recognizer::{FixedRecognizer, HttpRecognizer};
pub use storage::{FileStateStore, InMemoryStateStore};
