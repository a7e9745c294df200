//! # edict-contracts
//!
//! Shared types and wire formats for the EDICT policy evaluation engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types. The serde attributes
//! pin the JSON shapes the administering systems produce (camelCase event
//! context, snake_case rule fields, PascalCase decision statuses).

pub mod error;
pub mod event;
pub mod rule;
pub mod verdict;
