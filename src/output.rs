//! Output rendering for generate, validate, and fix commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::fix::FixOutcome;
use crate::generate::GenStats;
use crate::models::ValidateResult;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn fmt_accuracy(acc: Option<f64>) -> String {
    match acc {
        Some(a) => format!("{:.2}%", a * 100.0),
        None => "n/a".to_string(),
    }
}

/// Print generation statistics in the requested format.
pub fn print_generate(stats: &GenStats, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_generate_json(stats)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for (label, count) in &stats.by_label {
                let pct = *count as f64 / stats.written.max(1) as f64 * 100.0;
                let line = format!("  {:15} {:4} ({:5.1}%)", label, count, pct);
                if color {
                    println!("{} {}", "◆".blue(), line);
                } else {
                    println!("◆ {}", line);
                }
            }
            let mode = if stats.appended { "append" } else { "overwrite" };
            let summary = format!(
                "— Summary — written={} dataset={} mode={}",
                stats.written, stats.dataset, mode
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print validation results in the requested format.
pub fn print_validate(res: &ValidateResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_validate_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for m in &res.mismatches {
                let tag = if color {
                    "⟦mismatch⟧".red().bold().to_string()
                } else {
                    "⟦mismatch⟧".to_string()
                };
                let icon = if color {
                    "✖".red().to_string()
                } else {
                    "✖".to_string()
                };
                let expected = m
                    .expected_label
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{} {} {} — {}: stored={} expected={}",
                    icon, tag, m.id, m.reason, m.stored_label, expected
                );
            }
            for s in &res.skipped {
                let tag = if color {
                    "⟦skipped⟧".yellow().bold().to_string()
                } else {
                    "⟦skipped⟧".to_string()
                };
                let icon = if color {
                    "▲".yellow().to_string()
                } else {
                    "▲".to_string()
                };
                println!("{} {} line {} — {}", icon, tag, s.line, s.reason);
            }
            for t in &res.by_label {
                println!(
                    "  {:15} | correct: {:4} | incorrect: {:4}",
                    t.label.to_string(),
                    t.correct,
                    t.incorrect
                );
            }
            let summary = format!(
                "— Summary — total={} matched={} mismatched={} skipped={} accuracy={}",
                res.summary.total,
                res.summary.matched,
                res.summary.mismatched,
                res.summary.skipped,
                fmt_accuracy(res.summary.accuracy)
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print fix outcome. When `wrote` is false the changes are previews.
pub fn print_fix(outcome: &FixOutcome, output: &str, wrote: bool, target: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_fix_json(outcome, wrote, target)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let verb = if wrote { "fixed:" } else { "would fix:" };
            for c in &outcome.changes {
                let detail = if c.comment_only {
                    format!("{} (comment only)", c.id)
                } else {
                    format!("{} {} -> {}", c.id, c.from, c.to)
                };
                if color {
                    println!("{} {}", verb.green().bold(), detail);
                } else {
                    println!("{} {}", verb, detail);
                }
            }
            let summary = format!(
                "— Summary — total={} changed={} unclassifiable={} skipped={} target={}",
                outcome.total, outcome.changed, outcome.unclassifiable, outcome.skipped, target
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose generate JSON object (pure) for testing/snapshot purposes.
pub fn compose_generate_json(stats: &GenStats) -> JsonVal {
    let by_label: Vec<_> = stats
        .by_label
        .iter()
        .map(|(label, count)| json!({"label": label, "count": count}))
        .collect();
    json!({
        "by_label": by_label,
        "summary": {
            "written": stats.written,
            "appended": stats.appended,
            "dataset": stats.dataset,
        }
    })
}

/// Compose validate JSON object (pure) for testing/snapshot purposes.
pub fn compose_validate_json(res: &ValidateResult) -> JsonVal {
    // Directly serialize ValidateResult, keeping stable shape
    serde_json::to_value(res).unwrap()
}

/// Compose fix JSON object (pure) for testing/snapshot purposes.
pub fn compose_fix_json(outcome: &FixOutcome, wrote: bool, target: &str) -> JsonVal {
    let changes: Vec<_> = outcome
        .changes
        .iter()
        .map(|c| {
            json!({
                "id": c.id,
                "from": c.from.to_string(),
                "to": c.to.to_string(),
                "comment_only": c.comment_only,
            })
        })
        .collect();
    json!({
        "changes": changes,
        "summary": {
            "total": outcome.total,
            "changed": outcome.changed,
            "unclassifiable": outcome.unclassifiable,
            "skipped": outcome.skipped,
            "wrote": wrote,
            "target": target,
        }
    })
}
