//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, search and notification modules into catalog APIs.
//! - Keep outer layers (CLI, UI) decoupled from core internals.

pub mod catalog;
