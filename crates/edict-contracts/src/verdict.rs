//! Decision and verdict types.
//!
//! A `Decision` is authored on a rule; a `Verdict` is what the engine returns
//! for one evaluated event. EDICT is review-by-default: when no rule governs
//! an event, the verdict requires human review rather than silently approving
//! or prohibiting.

use serde::{Deserialize, Serialize};

use crate::rule::PolicyRule;

/// The closed set of decision statuses.
///
/// The taxonomy defines exactly these three; new statuses are added here
/// explicitly, never inferred from rule data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStatus {
    /// The tool usage is permitted.
    Approved,
    /// The tool usage is denied.
    Prohibited,
    /// The tool usage is suspended pending human review.
    RequiresReview,
}

/// The decision a rule produces when it governs an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// The outcome.
    pub status: DecisionStatus,
    /// Human-readable explanation, surfaced in the verdict and audit log.
    pub reason: String,
    /// When true, the caller should raise an audit record for this decision.
    #[serde(default)]
    pub audit_trigger: bool,
}

/// The engine's output for one evaluated event.
///
/// Newly constructed on every call; never cached or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The governing decision status.
    pub status: DecisionStatus,
    /// The matched rule, or `None` on the default-review path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    /// Explanation: the matched rule's reason, or the default-path message.
    pub reason: String,
}

impl Verdict {
    /// Reason text returned when no rule matched. Stable wording — downstream
    /// audit tooling greps for the "No matching rule" prefix.
    pub const NO_MATCH_REASON: &'static str =
        "No matching rule; defaulting to manual review.";

    /// Build a verdict from the rule that governs the event.
    pub fn from_rule(rule: &PolicyRule) -> Self {
        Self {
            status: rule.decision.status,
            rule_id: Some(rule.rule_id.clone()),
            reason: rule.decision.reason.clone(),
        }
    }

    /// The default verdict for an event no active rule matched.
    pub fn default_review() -> Self {
        Self {
            status: DecisionStatus::RequiresReview,
            rule_id: None,
            reason: Self::NO_MATCH_REASON.to_string(),
        }
    }
}
