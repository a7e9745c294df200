//! The evaluation entry point.
//!
//! Evaluation algorithm:
//!
//! 1. Filter to rules with `is_active == true`. The evaluator re-checks this
//!    even when the caller claims to have pre-filtered — a disabled rule must
//!    never be enforced by accident.
//! 2. Match every active rule against the event. This is priority-driven
//!    selection, not a first-match-by-iteration-order search.
//! 3. Among the matches, the rule with the lowest numeric `priority` governs.
//!    Ties break to the earliest rule in the caller-supplied input order,
//!    which keeps decisions reproducible for audit.
//! 4. No match → the default review verdict ("No matching rule; …").
//!
//! The function is pure and total: no I/O, no shared state, always returns a
//! `Verdict`, never fails. It is safe to call concurrently from any number of
//! threads.

use tracing::{debug, warn};

use edict_contracts::event::ToolUsageEvent;
use edict_contracts::rule::PolicyRule;
use edict_contracts::verdict::Verdict;

use crate::matcher::rule_matches;

/// Evaluate one tool usage event against the supplied rules and return the
/// governing verdict.
pub fn evaluate(event: &ToolUsageEvent, rules: &[PolicyRule]) -> Verdict {
    debug!(
        event_id = %event.id,
        tool = %event.tool.name,
        action = %event.action.kind,
        rule_count = rules.len(),
        "evaluating tool usage event"
    );

    let mut winner: Option<&PolicyRule> = None;

    for rule in rules {
        if !rule.is_active {
            continue;
        }
        if !rule_matches(rule, event) {
            continue;
        }

        debug!(
            rule_id = %rule.rule_id,
            priority = rule.priority,
            "rule matched"
        );

        // Strictly-less keeps the earliest equal-priority match: stable
        // tie-break by input order.
        match winner {
            Some(current) if rule.priority >= current.priority => {}
            _ => winner = Some(rule),
        }
    }

    match winner {
        Some(rule) => {
            debug!(
                rule_id = %rule.rule_id,
                status = ?rule.decision.status,
                "rule governs event"
            );
            Verdict::from_rule(rule)
        }
        None => {
            warn!(
                event_id = %event.id,
                tool = %event.tool.name,
                "no policy rule matched; defaulting to review"
            );
            Verdict::default_review()
        }
    }
}
