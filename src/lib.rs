//! Trade Pilot - Conversational Trading Assistant Core
//!
//! This crate implements the turn-processing core of a conversational stock
//! trading assistant: intent-directed dialog dispatch and normalization of
//! recognizer entities into canonical order descriptors.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
