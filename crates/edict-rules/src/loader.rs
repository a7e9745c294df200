//! Rule-set loading from administered sources.
//!
//! Rules are authored outside the engine — in a database, a config file, or a
//! remote administration API. This module covers the file/config path: strict
//! parsing from TOML or JSON documents, plus a lossy path for row-at-a-time
//! sources where one malformed rule must not take down evaluation for all
//! events (each skip is logged for operational visibility).

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use edict_contracts::error::{EdictError, EdictResult};
use edict_contracts::event::ToolUsageEvent;
use edict_contracts::rule::PolicyRule;
use edict_contracts::verdict::Verdict;

/// An administered set of policy rules.
///
/// Construct via `from_json_str`, `from_toml_str`, or `from_file`, then call
/// [`RuleSet::evaluate`] per event. The set is immutable after construction
/// and safe to share across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<PolicyRule>,
}

impl RuleSet {
    /// Build a rule set directly from already-deserialized rules.
    pub fn new(rules: Vec<PolicyRule>) -> Self {
        Self { rules }
    }

    /// Parse `s` as a JSON array of rules.
    ///
    /// Returns `EdictError::ConfigError` if the document is malformed or any
    /// rule does not match the schema. Use [`RuleSet::from_json_values_lossy`]
    /// when partial loading is preferable.
    pub fn from_json_str(s: &str) -> EdictResult<Self> {
        let rules: Vec<PolicyRule> =
            serde_json::from_str(s).map_err(|e| EdictError::ConfigError {
                reason: format!("failed to parse rules JSON: {}", e),
            })?;
        Ok(Self { rules })
    }

    /// Parse `s` as a TOML document with a top-level `[[rules]]` array.
    ///
    /// Returns `EdictError::ConfigError` if the TOML is malformed or does not
    /// match the rule schema.
    pub fn from_toml_str(s: &str) -> EdictResult<Self> {
        let set: RuleSet = toml::from_str(s).map_err(|e| EdictError::ConfigError {
            reason: format!("failed to parse rules TOML: {}", e),
        })?;
        Ok(set)
    }

    /// Read the file at `path` and parse it by extension (`.json` or `.toml`).
    ///
    /// Returns `EdictError::ConfigError` if the extension is unsupported, the
    /// file cannot be read, or its contents fail to parse.
    pub fn from_file(path: &Path) -> EdictResult<Self> {
        enum Format {
            Json,
            Toml,
        }

        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Format::Json,
            Some("toml") => Format::Toml,
            other => {
                return Err(EdictError::ConfigError {
                    reason: format!(
                        "unsupported rules file extension {:?} for '{}' (expected .json or .toml)",
                        other.unwrap_or(""),
                        path.display()
                    ),
                })
            }
        };

        let contents = std::fs::read_to_string(path).map_err(|e| EdictError::ConfigError {
            reason: format!("failed to read rules file '{}': {}", path.display(), e),
        })?;

        match format {
            Format::Json => Self::from_json_str(&contents),
            Format::Toml => Self::from_toml_str(&contents),
        }
    }

    /// Build a rule set from loose JSON values, skipping rules that fail to
    /// deserialize.
    ///
    /// Intended for row-at-a-time sources (e.g. a rules table) where one bad
    /// definition must not block the rest. Every skipped rule is logged at
    /// `warn` with its `rule_id` when one is present.
    pub fn from_json_values_lossy(values: &[Value]) -> Self {
        let mut rules = Vec::with_capacity(values.len());

        for value in values {
            match serde_json::from_value::<PolicyRule>(value.clone()) {
                Ok(rule) => rules.push(rule),
                Err(e) => {
                    let rule_id = value
                        .get("rule_id")
                        .and_then(Value::as_str)
                        .unwrap_or("<unknown>");
                    warn!(rule_id, error = %e, "skipping malformed rule definition");
                }
            }
        }

        Self { rules }
    }

    /// Evaluate one event against this rule set.
    pub fn evaluate(&self, event: &ToolUsageEvent) -> Verdict {
        edict_engine::evaluate(event, &self.rules)
    }

    /// The loaded rules, in administered order.
    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    /// Number of loaded rules (active and inactive).
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are loaded.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
