//! Policy rule types.
//!
//! Rules are authored and administered outside the engine (database, config
//! file) and supplied wholesale on every evaluation call. The engine holds no
//! rule state between calls.
//!
//! Precedence model: `priority` is an integer where a LOWER numeric value
//! means HIGHER precedence. When several active rules match the same event,
//! the one with the lowest priority number governs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::verdict::Decision;

/// A single governance rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRule {
    /// Unique, stable identifier (e.g. "R1-PROHIBIT-OLD-MJ"). Surfaced in
    /// verdicts and audit records.
    pub rule_id: String,
    /// Human-readable label.
    pub name: String,
    /// Precedence: lower number wins when multiple rules match.
    pub priority: i64,
    /// Inactive rules are excluded from evaluation. The evaluator re-checks
    /// this even if the caller claims to have pre-filtered.
    pub is_active: bool,
    /// Scoping tag (e.g. "DTC-EU", "All"). Informational; does not gate
    /// matching unless a clause references it explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    /// The boolean condition tree this rule matches events against.
    ///
    /// Defaults to an empty AND set when absent, which can never match — a
    /// rule arriving without conditions loads but never fires.
    #[serde(default)]
    pub conditions: ConditionSet,
    /// The decision produced when this rule governs an event.
    pub decision: Decision,
}

/// Boolean combinator over a rule's clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolOperator {
    /// Every clause must hold.
    And,
    /// At least one clause must hold.
    Or,
}

/// A node of a rule's condition tree: either a leaf predicate or a nested
/// group. Current administered rules only use single-level clause lists;
/// the recursive variant exists so nested grouping is representable without
/// a schema change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionNode {
    /// A leaf field/operator/value predicate.
    Clause(Clause),
    /// A nested boolean group.
    Group(ConditionSet),
}

/// A boolean expression over condition nodes.
///
/// An empty `clauses` list never matches, regardless of operator. This is
/// deliberate: a rule whose clauses were accidentally emptied must not
/// silently become a match-everything rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSet {
    /// How the clauses combine.
    pub operator: BoolOperator,
    /// The member predicates/groups.
    pub clauses: Vec<ConditionNode>,
}

impl Default for ConditionSet {
    /// An empty AND set — never matches.
    fn default() -> Self {
        Self {
            operator: BoolOperator::And,
            clauses: Vec::new(),
        }
    }
}

/// A single predicate: resolve `field` on the event, compare against `value`
/// using `operator`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clause {
    /// Dotted field path on the event (e.g. "tool.version", "context.region").
    pub field: String,
    /// The comparison to apply.
    pub operator: ComparisonOperator,
    /// Literal operand: a string, number, boolean, or array depending on the
    /// operator.
    pub value: Value,
}

/// The closed set of clause comparison operators.
///
/// Every operator follows the same contract: resolve the field, compare,
/// return a boolean — and degrade to false (never panic, never error) when
/// the field is absent or the data is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    /// Strict equality between the resolved field and the literal.
    Equals,
    /// Strict inequality. False when the field is absent.
    NotEquals,
    /// Membership of the resolved field in the literal array.
    In,
    /// Numeric greater-than between the resolved field and the literal.
    GreaterThan,
    /// The resolved version string is strictly below the literal version
    /// under numeric segment comparison.
    SemverLessThan,
    /// The resolved version string satisfies the literal range expression
    /// (a conjunction of comparator terms, e.g. ">=5.0.0 <6.0.0").
    SemverSatisfies,
}
