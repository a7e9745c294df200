//! Leaf clause evaluation: field resolution plus one comparison.
//!
//! Field resolution is a fixed lookup table over the enumerated dotted paths
//! the administered rule format uses, not generic reflection — the event is
//! strongly typed, and the table keeps the data-driven rule format intact
//! without giving rules access to arbitrary structure.
//!
//! Every operator shares one contract: resolve the field, compare, return a
//! boolean. A missing field, an unknown path, or malformed data evaluates to
//! false. Nothing here panics or returns an error — fail-closed per clause.

use serde_json::Value;

use edict_contracts::event::ToolUsageEvent;
use edict_contracts::rule::{Clause, ComparisonOperator};

use crate::semver;

/// Resolve a dotted field path against the event.
///
/// Returns `None` for unknown paths and for optional attributes the event
/// does not carry. Context paths use the camelCase wire names rules are
/// authored against.
pub fn resolve_field<'a>(event: &'a ToolUsageEvent, path: &str) -> Option<&'a str> {
    match path {
        "id" => Some(&event.id),
        "tool.id" => Some(&event.tool.id),
        "tool.name" => Some(&event.tool.name),
        "tool.version" => event.tool.version.as_deref(),
        "actor.role" => Some(&event.actor.role),
        "action.type" => Some(&event.action.kind),
        "context.tenantId" => event.context.tenant_id.as_deref(),
        "context.enterpriseId" => event.context.enterprise_id.as_deref(),
        "context.partnerId" => event.context.partner_id.as_deref(),
        "context.brand" => event.context.brand.as_deref(),
        "context.region" => event.context.region.as_deref(),
        "context.channel" => event.context.channel.as_deref(),
        "context.policySnapshotId" => event.context.policy_snapshot_id.as_deref(),
        _ => None,
    }
}

/// Evaluate one clause against the event. Pure; never panics.
pub fn evaluate_clause(clause: &Clause, event: &ToolUsageEvent) -> bool {
    let Some(field) = resolve_field(event, &clause.field) else {
        return false;
    };

    match clause.operator {
        ComparisonOperator::Equals => literal_eq(field, &clause.value),
        ComparisonOperator::NotEquals => match clause.value.as_str() {
            Some(literal) => field != literal,
            None => false,
        },
        ComparisonOperator::In => match clause.value.as_array() {
            Some(items) => items.iter().any(|item| literal_eq(field, item)),
            None => false,
        },
        ComparisonOperator::GreaterThan => {
            match (field.trim().parse::<f64>(), literal_as_f64(&clause.value)) {
                (Ok(lhs), Some(rhs)) => lhs > rhs,
                _ => false,
            }
        }
        ComparisonOperator::SemverLessThan => match clause.value.as_str() {
            Some(bound) => semver::lt(field, bound).unwrap_or(false),
            None => false,
        },
        ComparisonOperator::SemverSatisfies => match clause.value.as_str() {
            Some(range) => semver::satisfies(field, range).unwrap_or(false),
            None => false,
        },
    }
}

/// Strict equality between a resolved (string) field and a JSON literal.
///
/// Event fields are strings by construction, so a non-string literal can
/// never be strictly equal to one.
fn literal_eq(field: &str, literal: &Value) -> bool {
    literal.as_str() == Some(field)
}

/// Numeric value of a literal: a JSON number, or a string that parses as one.
fn literal_as_f64(literal: &Value) -> Option<f64> {
    match literal {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
