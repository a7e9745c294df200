//! # edict-rules
//!
//! Rule-set loading for the EDICT policy evaluation engine.
//!
//! ## Overview
//!
//! This crate provides [`RuleSet`], which parses administered policy rules
//! from TOML or JSON documents and hands them to
//! [`edict_engine::evaluate`] per event. Strict parsing rejects a whole
//! document on the first malformed rule; the lossy path skips bad rules with
//! a logged warning, for row-at-a-time sources where one broken definition
//! must not block enforcement of the rest.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use edict_rules::RuleSet;
//!
//! let rules = RuleSet::from_file(Path::new("rules/global-media-tools.toml"))?;
//! let verdict = rules.evaluate(&event);
//! ```

pub mod loader;

pub use loader::RuleSet;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use edict_contracts::error::EdictError;
    use edict_contracts::event::ToolUsageEvent;
    use edict_contracts::verdict::DecisionStatus;

    use crate::RuleSet;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Parse an event from its administered JSON form.
    fn event(json: &str) -> ToolUsageEvent {
        serde_json::from_str(json).unwrap()
    }

    fn legacy_midjourney_event() -> ToolUsageEvent {
        event(
            r#"{
                "id": "evt-1",
                "tool": { "id": "mj-v5", "name": "Midjourney", "version": "5.2.0" },
                "actor": { "role": "designer" },
                "action": { "type": "FinalAssetGeneration" },
                "context": { "tenantId": "t-1", "region": "EU" },
                "ts": "2026-03-01T12:00:00Z"
            }"#,
        )
    }

    // ── 1. TOML loading ───────────────────────────────────────────────────────

    #[test]
    fn test_toml_rule_set_parses_and_evaluates() {
        let toml = r#"
            [[rules]]
            rule_id = "R1-PROHIBIT-OLD-MJ"
            name = "Prohibit Midjourney < 6.0.0"
            priority = 10
            is_active = true
            context_id = "global-media-tools"

            [rules.conditions]
            operator = "AND"

            [[rules.conditions.clauses]]
            field = "tool.name"
            operator = "equals"
            value = "Midjourney"

            [[rules.conditions.clauses]]
            field = "tool.version"
            operator = "semver_less_than"
            value = "6.0.0"

            [rules.decision]
            status = "Prohibited"
            reason = "Legacy Midjourney versions are not approved."
            audit_trigger = true
        "#;

        let set = RuleSet::from_toml_str(toml).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.rules()[0].rule_id, "R1-PROHIBIT-OLD-MJ");

        let verdict = set.evaluate(&legacy_midjourney_event());
        assert_eq!(verdict.status, DecisionStatus::Prohibited);
        assert_eq!(verdict.rule_id.as_deref(), Some("R1-PROHIBIT-OLD-MJ"));
    }

    #[test]
    fn test_toml_parse_error_is_config_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        match RuleSet::from_toml_str(bad_toml) {
            Err(EdictError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse rules TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 2. JSON loading ───────────────────────────────────────────────────────

    #[test]
    fn test_json_rule_set_parses_and_evaluates() {
        let json = r#"[
            {
                "rule_id": "R2-REVIEW-UNKNOWN",
                "name": "Review unversioned tools",
                "priority": 50,
                "is_active": true,
                "conditions": {
                    "operator": "OR",
                    "clauses": [
                        { "field": "tool.version", "operator": "equals", "value": "unknown" },
                        { "field": "tool.version", "operator": "equals", "value": "N/A" }
                    ]
                },
                "decision": {
                    "status": "RequiresReview",
                    "reason": "Tool version information is missing or unrecognized."
                }
            }
        ]"#;

        let set = RuleSet::from_json_str(json).unwrap();
        assert_eq!(set.len(), 1);

        let verdict = set.evaluate(&event(
            r#"{
                "id": "evt-2",
                "tool": { "id": "dalle", "name": "DALL-E", "version": "unknown" },
                "actor": { "role": "marketer" },
                "action": { "type": "InternalConcept" },
                "ts": "2026-03-01T12:00:00Z"
            }"#,
        ));
        assert_eq!(verdict.status, DecisionStatus::RequiresReview);
        assert_eq!(verdict.rule_id.as_deref(), Some("R2-REVIEW-UNKNOWN"));
    }

    #[test]
    fn test_json_parse_error_is_config_error() {
        match RuleSet::from_json_str("{ not json") {
            Err(EdictError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse rules JSON"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 3. file dispatch ──────────────────────────────────────────────────────

    #[test]
    fn test_unsupported_extension_is_rejected_before_reading() {
        match RuleSet::from_file(Path::new("rules/global.yaml")) {
            Err(EdictError::ConfigError { reason }) => {
                assert!(
                    reason.contains("unsupported rules file extension"),
                    "unexpected reason: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_config_error() {
        match RuleSet::from_file(Path::new("definitely/not/here.json")) {
            Err(EdictError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read rules file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 4. lossy loading ──────────────────────────────────────────────────────

    /// One malformed definition is skipped; well-formed neighbours load and
    /// enforce normally.
    #[test]
    fn test_lossy_loading_skips_malformed_rules() {
        let values = vec![
            serde_json::json!({
                "rule_id": "R-GOOD",
                "name": "Valid rule",
                "priority": 10,
                "is_active": true,
                "conditions": {
                    "operator": "AND",
                    "clauses": [
                        { "field": "tool.name", "operator": "equals", "value": "Midjourney" }
                    ]
                },
                "decision": { "status": "Approved", "reason": "cleared" }
            }),
            // Missing the decision block entirely: not deserializable.
            serde_json::json!({
                "rule_id": "R-BAD",
                "name": "Broken rule",
                "priority": 1,
                "is_active": true
            }),
            // Not even an object.
            serde_json::json!("garbage"),
        ];

        let set = RuleSet::from_json_values_lossy(&values);
        assert_eq!(set.len(), 1);
        assert_eq!(set.rules()[0].rule_id, "R-GOOD");

        let verdict = set.evaluate(&legacy_midjourney_event());
        assert_eq!(verdict.rule_id.as_deref(), Some("R-GOOD"));
        assert_eq!(verdict.status, DecisionStatus::Approved);
    }
}
