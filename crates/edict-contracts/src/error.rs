//! Error types for the fallible surfaces around the engine.
//!
//! Evaluation itself is pure and total — it returns a `Verdict` directly and
//! never fails. Errors only arise while loading administered rule sets or
//! event payloads from files and config.

use thiserror::Error;

/// The unified error type for the EDICT crates.
#[derive(Debug, Error)]
pub enum EdictError {
    /// A rule set or event payload could not be read or parsed.
    #[error("configuration error: {reason}")]
    ConfigError {
        /// What failed and why.
        reason: String,
    },

    /// A specific rule definition was structurally invalid.
    #[error("invalid rule '{rule_id}': {reason}")]
    InvalidRule {
        /// The offending rule, when identifiable.
        rule_id: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Convenience alias used throughout the EDICT crates.
pub type EdictResult<T> = Result<T, EdictError>;
