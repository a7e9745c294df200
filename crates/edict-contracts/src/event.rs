//! Tool usage event types.
//!
//! A `ToolUsageEvent` is an immutable fact describing one instance of AI-tool
//! usage. The caller constructs it immediately before evaluation; the engine
//! never mutates or persists it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One instance of AI-tool usage submitted for policy evaluation.
///
/// The engine reads this by dotted field path (e.g. `"tool.version"`,
/// `"context.region"`) when evaluating rule clauses. Missing optional fields
/// simply never match — they are not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolUsageEvent {
    /// Opaque identifier, unique per event. Assigned by the caller.
    pub id: String,
    /// The AI tool being used.
    pub tool: ToolRef,
    /// The human or system role performing the action.
    pub actor: Actor,
    /// What the tool is being used for.
    pub action: ActionRef,
    /// Tenancy and routing attributes. All optional.
    #[serde(default)]
    pub context: EventContext,
    /// Wall-clock time of the usage (UTC, ISO-8601 on the wire).
    pub ts: DateTime<Utc>,
}

/// Identity of the AI tool involved in an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRef {
    /// Stable tool identifier (e.g. "mj-v5").
    pub id: String,
    /// Display name matched by rule clauses (e.g. "Midjourney").
    pub name: String,
    /// Semantic-version string (e.g. "5.2.0"). Absent for tools without
    /// semver; version-comparing clauses then never match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The role performing the evaluated action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Role name (e.g. "designer", "Senior Copywriter").
    pub role: String,
}

/// The action category of the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRef {
    /// Enum-like action type string (e.g. "FinalAssetGeneration").
    /// Serialized as `"type"` to match the administered rule format.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Free-form tenancy/routing attributes attached to an event.
///
/// Every field is optional; rule clauses referencing an absent attribute
/// evaluate to false. Wire names are camelCase to match the administering
/// system's JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventContext {
    /// Owning tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Enterprise the tenant belongs to, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<String>,
    /// Agency/vendor partner involved in the work, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    /// Brand the asset is produced for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Market region code (e.g. "EU").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Distribution channel (e.g. "DTC").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// The policy snapshot the caller evaluated under, for audit correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_snapshot_id: Option<String>,
}
