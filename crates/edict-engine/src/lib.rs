//! # edict-engine
//!
//! The deterministic, priority-driven policy evaluation engine for EDICT.
//!
//! ## Overview
//!
//! Given a [`ToolUsageEvent`](edict_contracts::event::ToolUsageEvent) and the
//! full set of administered [`PolicyRule`](edict_contracts::rule::PolicyRule)s,
//! [`evaluate`] returns the governing
//! [`Verdict`](edict_contracts::verdict::Verdict): every active rule is
//! matched, the lowest-priority-number match wins, and an event no rule
//! matches falls back to a `RequiresReview` verdict. Evaluation is a pure,
//! total, synchronous function — no I/O, no state between calls, safe to
//! invoke concurrently.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use edict_engine::evaluate;
//!
//! let verdict = evaluate(&event, &rules);
//! match verdict.rule_id {
//!     Some(rule_id) => println!("{rule_id}: {:?}", verdict.status),
//!     None => println!("default: {}", verdict.reason),
//! }
//! ```

pub mod condition;
pub mod evaluator;
pub mod matcher;
pub mod semver;

pub use evaluator::evaluate;

// ── Tests ─────────────────────────────────────────────────────────────────────
