//! Application layer.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod handlers;

pub use handlers::{
    ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler, ProcessTurnResult,
};
