//! Validation pass: re-derive every ticket's verdict and compare.
//!
//! Comment comparison is exact string equality against the canonical
//! template; the validator never judges free-form text similarity. Parse
//! failures are skipped entries, unclassifiable tickets are mismatches with
//! reason "unclassifiable". The dataset is never mutated.

use crate::dataset::Record;
use crate::error::AppError;
use crate::models::{LabelTally, Mismatch, SkippedRecord, ValidateResult, ValidateSummary};
use crate::triage::{classify, RuleTable};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Validate all records against the rule table.
pub fn run_validate(records: &[Record], table: &RuleTable) -> ValidateResult {
    let mut mismatches = Vec::new();
    let mut skipped = Vec::new();
    let mut matched = 0usize;
    // Keyed by display name for deterministic report ordering.
    let mut tally: BTreeMap<String, LabelTally> = BTreeMap::new();

    for rec in records {
        let ticket = match &rec.parsed {
            Ok(t) => t,
            Err(e) => {
                skipped.push(SkippedRecord {
                    line: e.line(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let entry = tally
            .entry(ticket.label.to_string())
            .or_insert_with(|| LabelTally {
                label: ticket.label,
                correct: 0,
                incorrect: 0,
            });
        match classify(&ticket.attrs(), table) {
            Ok(expected) => {
                if ticket.label == expected.label && ticket.comment == expected.comment {
                    matched += 1;
                    entry.correct += 1;
                } else {
                    entry.incorrect += 1;
                    let reason = if ticket.label != expected.label {
                        format!("label mismatch (expected rule {})", expected.rule)
                    } else {
                        "comment mismatch".to_string()
                    };
                    mismatches.push(Mismatch {
                        id: ticket.id.clone(),
                        stored_label: ticket.label,
                        stored_comment: ticket.comment.clone(),
                        expected_label: Some(expected.label),
                        expected_comment: Some(expected.comment),
                        reason,
                    });
                }
            }
            Err(_) => {
                entry.incorrect += 1;
                mismatches.push(Mismatch {
                    id: ticket.id.clone(),
                    stored_label: ticket.label,
                    stored_comment: ticket.comment.clone(),
                    expected_label: None,
                    expected_comment: None,
                    reason: "unclassifiable".to_string(),
                });
            }
        }
    }

    let classified = matched + mismatches.len();
    let accuracy = if classified > 0 {
        Some(matched as f64 / classified as f64)
    } else {
        None
    };
    ValidateResult {
        summary: ValidateSummary {
            total: records.len(),
            matched,
            mismatched: mismatches.len(),
            skipped: skipped.len(),
            accuracy,
        },
        by_label: tally.into_values().collect(),
        mismatches,
        skipped,
    }
}

/// Persist the mismatch report, replacing any prior one.
pub fn write_report(path: &Path, res: &ValidateResult) -> Result<(), AppError> {
    let body =
        serde_json::to_string_pretty(res).expect("report serialization cannot fail");
    fs::write(path, body).map_err(|e| AppError::io(path, e))
}
