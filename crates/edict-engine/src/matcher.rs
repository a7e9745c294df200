//! Rule-level matching: combining clauses under AND/OR.

use edict_contracts::event::ToolUsageEvent;
use edict_contracts::rule::{BoolOperator, ConditionNode, ConditionSet, PolicyRule};

use crate::condition::evaluate_clause;

/// True when the condition tree matches the event.
///
/// AND requires every node to hold (short-circuits on the first false);
/// OR requires at least one (short-circuits on the first true). Clauses are
/// side-effect free, so short-circuiting never changes semantics.
///
/// An empty clause list never matches, under either operator. The convention
/// applies recursively to nested groups: an emptied rule fails closed instead
/// of becoming a match-everything rule.
pub fn conditions_match(set: &ConditionSet, event: &ToolUsageEvent) -> bool {
    if set.clauses.is_empty() {
        return false;
    }

    match set.operator {
        BoolOperator::And => set.clauses.iter().all(|node| node_matches(node, event)),
        BoolOperator::Or => set.clauses.iter().any(|node| node_matches(node, event)),
    }
}

/// True when the rule's conditions match the event.
///
/// Does not consult `is_active` — activity filtering belongs to the
/// evaluator, which must apply it exactly once across all rules.
pub fn rule_matches(rule: &PolicyRule, event: &ToolUsageEvent) -> bool {
    conditions_match(&rule.conditions, event)
}

/// Evaluate one node: a leaf clause or a nested group.
fn node_matches(node: &ConditionNode, event: &ToolUsageEvent) -> bool {
    match node {
        ConditionNode::Clause(clause) => evaluate_clause(clause, event),
        ConditionNode::Group(group) => conditions_match(group, event),
    }
}
