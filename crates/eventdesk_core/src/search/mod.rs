//! Event search entry points.
//!
//! # Responsibility
//! - Expose pluggable filters over the catalog's event collection.
//! - Keep result shaping inside core.

pub mod strategy;
