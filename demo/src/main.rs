//! EDICT — Policy Evaluation Engine Demo CLI
//!
//! Runs the built-in governance scenarios, or evaluates an event file against
//! a rules file.
//!
//! Usage:
//!   cargo run -p demo -- scenarios
//!   cargo run -p demo -- evaluate --event event.json --rules rules.toml

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use edict_contracts::error::{EdictError, EdictResult};
use edict_contracts::event::ToolUsageEvent;
use edict_contracts::verdict::Verdict;
use edict_rules::RuleSet;

// ── CLI definition ────────────────────────────────────────────────────────────

/// EDICT — deterministic policy evaluation for AI-tool governance.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "EDICT policy evaluation engine demo",
    long_about = "Evaluates tool usage events against prioritized governance rules:\n\
                  every active rule is matched, the lowest priority number governs,\n\
                  and unmatched events fall back to a RequiresReview verdict."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in scenarios against the bundled sample rule set.
    Scenarios,
    /// Evaluate a JSON event file against a JSON/TOML rules file.
    Evaluate {
        /// Path to the tool usage event (JSON).
        #[arg(long)]
        event: PathBuf,
        /// Path to the rule set (.json or .toml).
        #[arg(long)]
        rules: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Structured logging. Set RUST_LOG=debug to watch per-rule matching.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Scenarios => run_scenarios(),
        Command::Evaluate { event, rules } => run_evaluate(&event, &rules),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── File-based evaluation ─────────────────────────────────────────────────────

fn run_evaluate(event_path: &PathBuf, rules_path: &PathBuf) -> EdictResult<()> {
    let event_json =
        std::fs::read_to_string(event_path).map_err(|e| EdictError::ConfigError {
            reason: format!("failed to read event file '{}': {}", event_path.display(), e),
        })?;
    let event: ToolUsageEvent =
        serde_json::from_str(&event_json).map_err(|e| EdictError::ConfigError {
            reason: format!("failed to parse event '{}': {}", event_path.display(), e),
        })?;

    let rules = RuleSet::from_file(rules_path)?;
    let verdict = rules.evaluate(&event);

    let rendered = serde_json::to_string_pretty(&verdict).map_err(|e| EdictError::ConfigError {
        reason: format!("failed to render verdict: {}", e),
    })?;
    println!("{rendered}");
    Ok(())
}

// ── Built-in scenarios ────────────────────────────────────────────────────────

fn run_scenarios() -> EdictResult<()> {
    print_banner();

    let rules = RuleSet::from_json_str(SAMPLE_RULES)?;
    println!("Loaded {} sample rules.\n", rules.len());

    for (name, event_json) in SCENARIOS {
        let event: ToolUsageEvent =
            serde_json::from_str(event_json).map_err(|e| EdictError::ConfigError {
                reason: format!("bad built-in scenario event: {}", e),
            })?;

        let verdict = rules.evaluate(&event);
        print_verdict(name, &event, &verdict);
    }

    Ok(())
}

fn print_verdict(name: &str, event: &ToolUsageEvent, verdict: &Verdict) {
    println!("Scenario: {name}");
    println!(
        "  Event:   {} v{} / {} / {}",
        event.tool.name,
        event.tool.version.as_deref().unwrap_or("-"),
        event.actor.role,
        event.action.kind
    );
    println!("  Status:  {:?}", verdict.status);
    match &verdict.rule_id {
        Some(rule_id) => println!("  Rule:    {rule_id}"),
        None => println!("  Rule:    (none — default fallback)"),
    }
    println!("  Reason:  {}", verdict.reason);
    println!();
}

fn print_banner() {
    println!();
    println!("EDICT — AI-Tool Governance Policy Engine");
    println!("========================================");
    println!();
    println!("Evaluation per event:");
    println!("  [1] Inactive rules are filtered out (re-checked, never trusted)");
    println!("  [2] Every active rule's condition tree is matched (AND/OR clauses)");
    println!("  [3] Lowest priority number among the matches governs; ties break");
    println!("      to input order");
    println!("  [4] No match → RequiresReview fallback verdict");
    println!();
}

// ── Sample data ───────────────────────────────────────────────────────────────

const SAMPLE_RULES: &str = r#"[
    {
        "rule_id": "R1-PROHIBIT-OLD-MJ",
        "name": "Prohibit Midjourney < 6.0.0 in EU",
        "priority": 10,
        "is_active": true,
        "context_id": "global-media-tools",
        "conditions": {
            "operator": "AND",
            "clauses": [
                { "field": "tool.name", "operator": "equals", "value": "Midjourney" },
                { "field": "tool.version", "operator": "semver_less_than", "value": "6.0.0" },
                { "field": "context.region", "operator": "equals", "value": "EU" }
            ]
        },
        "decision": {
            "status": "Prohibited",
            "reason": "Midjourney versions older than 6.0.0 are not compliant with current security standards.",
            "audit_trigger": true
        }
    },
    {
        "rule_id": "R2-REVIEW-FINAL-ASSETS",
        "name": "Review all final asset generation",
        "priority": 50,
        "is_active": true,
        "context_id": "global-media-tools",
        "conditions": {
            "operator": "AND",
            "clauses": [
                { "field": "action.type", "operator": "equals", "value": "FinalAssetGeneration" }
            ]
        },
        "decision": {
            "status": "RequiresReview",
            "reason": "Final assets require human review before release."
        }
    },
    {
        "rule_id": "R3-APPROVE-SENIOR-COPY",
        "name": "Approve senior copywriters",
        "priority": 100,
        "is_active": true,
        "context_id": "All",
        "conditions": {
            "operator": "AND",
            "clauses": [
                { "field": "actor.role", "operator": "equals", "value": "Senior Copywriter" }
            ]
        },
        "decision": {
            "status": "Approved",
            "reason": "Senior copywriters are pre-cleared for this workflow."
        }
    }
]"#;

const SCENARIOS: &[(&str, &str)] = &[
    (
        "Old Midjourney in EU → Prohibited by R1",
        r#"{
            "id": "evt-demo-1",
            "tool": { "id": "mj-v5", "name": "Midjourney", "version": "5.2.0" },
            "actor": { "role": "designer" },
            "action": { "type": "FinalAssetGeneration" },
            "context": { "tenantId": "demo-tenant", "region": "EU" },
            "ts": "2026-03-01T12:00:00Z"
        }"#,
    ),
    (
        "Midjourney 7.0.0 → falls through to R2 review",
        r#"{
            "id": "evt-demo-2",
            "tool": { "id": "mj-v7", "name": "Midjourney", "version": "7.0.0" },
            "actor": { "role": "designer" },
            "action": { "type": "FinalAssetGeneration" },
            "context": { "tenantId": "demo-tenant", "region": "EU" },
            "ts": "2026-03-01T12:05:00Z"
        }"#,
    ),
    (
        "Senior copywriter research → Approved by R3",
        r#"{
            "id": "evt-demo-3",
            "tool": { "id": "gpt-4", "name": "GPT-4", "version": "2024.1.0" },
            "actor": { "role": "Senior Copywriter" },
            "action": { "type": "Research" },
            "context": { "tenantId": "demo-tenant", "region": "US" },
            "ts": "2026-03-01T12:10:00Z"
        }"#,
    ),
    (
        "Unlisted tool, no matching rule → default review",
        r#"{
            "id": "evt-demo-4",
            "tool": { "id": "sketchbot", "name": "SketchBot" },
            "actor": { "role": "analyst" },
            "action": { "type": "InternalConcept" },
            "context": { "tenantId": "demo-tenant" },
            "ts": "2026-03-01T12:15:00Z"
        }"#,
    ),
];
